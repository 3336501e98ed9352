//! Resource list kept in step with the server's answers.

use std::future::Future;

use planeats_domain::models::Keyed;
use planeats_domain::{ApiResponse, MutationOutcome};
use tokio::sync::watch;
use tracing::debug;

/// Observable state of a [`SyncedList`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    /// Local snapshot of the list.
    pub items: Vec<T>,
    /// A refresh is in flight.
    pub loading: bool,
    /// Message of the last failed call.
    pub error: Option<String>,
    /// An add is in flight.
    pub is_adding: bool,
    /// An update is in flight.
    pub is_updating: bool,
    /// A removal is in flight.
    pub is_deleting: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            is_adding: false,
            is_updating: false,
            is_deleting: false,
        }
    }
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Update,
    Delete,
}

impl Op {
    fn flag<T>(self, state: &mut ListState<T>) -> &mut bool {
        match self {
            Self::Add => &mut state.is_adding,
            Self::Update => &mut state.is_updating,
            Self::Delete => &mut state.is_deleting,
        }
    }
}

/// A list of records that applies each successful write locally instead
/// of refetching: adds append, updates replace by key, removals filter by
/// key. A failed call leaves the items untouched and records the message.
#[derive(Debug)]
pub struct SyncedList<T> {
    state: watch::Sender<ListState<T>>,
}

impl<T: Keyed + Clone> Default for SyncedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone> SyncedList<T> {
    /// Creates an empty list in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(ListState::default()),
        }
    }

    /// Returns a snapshot of the state.
    #[must_use]
    pub fn state(&self) -> ListState<T> {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.state.subscribe()
    }

    /// Replaces the items with the server's list.
    pub async fn refresh<Fut>(&self, call: Fut) -> MutationOutcome<usize>
    where
        Fut: Future<Output = ApiResponse<Vec<T>>>,
    {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = call.await.into_result();
        self.state.send_modify(|s| {
            s.loading = false;
            match &result {
                Ok(items) => s.items.clone_from(items),
                Err(error) => s.error = Some(error.message.clone()),
            }
        });
        match result {
            Ok(items) => MutationOutcome::Success(items.len()),
            Err(error) => MutationOutcome::Failure(error.message),
        }
    }

    /// Appends the created record.
    pub async fn add<Fut>(&self, call: Fut) -> MutationOutcome<T>
    where
        Fut: Future<Output = ApiResponse<T>>,
    {
        self.write(Op::Add, call, |items, created| items.push(created))
            .await
    }

    /// Replaces the record with key `key` by the server's version.
    pub async fn update<Fut>(&self, key: T::Key, call: Fut) -> MutationOutcome<T>
    where
        Fut: Future<Output = ApiResponse<T>>,
    {
        self.write(Op::Update, call, move |items, updated| {
            for item in items.iter_mut().filter(|item| item.key() == key) {
                *item = updated.clone();
            }
        })
        .await
    }

    /// Drops the record with key `key` once the server confirms.
    pub async fn remove<R, Fut>(&self, key: T::Key, call: Fut) -> MutationOutcome<R>
    where
        R: Clone,
        Fut: Future<Output = ApiResponse<R>>,
    {
        self.write(Op::Delete, call, move |items, _| {
            items.retain(|item| item.key() != key);
        })
        .await
    }

    async fn write<R, Fut>(
        &self,
        op: Op,
        call: Fut,
        apply: impl FnOnce(&mut Vec<T>, R),
    ) -> MutationOutcome<R>
    where
        R: Clone,
        Fut: Future<Output = ApiResponse<R>>,
    {
        self.state.send_modify(|s| {
            *op.flag(s) = true;
            s.error = None;
        });

        let result = call.await.into_result();
        self.state.send_modify(|s| {
            *op.flag(s) = false;
            match &result {
                Ok(data) => apply(&mut s.items, data.clone()),
                Err(error) => {
                    debug!(error = %error, "list write failed");
                    s.error = Some(error.message.clone());
                }
            }
        });
        match result {
            Ok(data) => MutationOutcome::Success(data),
            Err(error) => MutationOutcome::Failure(error.message),
        }
    }
}
