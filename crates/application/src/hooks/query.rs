//! Session-gated query with stale-response protection.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use planeats_domain::{ApiResponse, FetchState, Session};
use tokio::sync::watch;
use tracing::debug;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
type Fetcher<D, T> = Arc<dyn Fn(D) -> BoxFuture<ApiResponse<T>> + Send + Sync>;

/// Which response wins when fetches overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Only the most recently issued fetch may update the state.
    #[default]
    LatestIssued,
    /// Whichever fetch resolves last updates the state.
    LastResolved,
}

/// A read bound to a dependency value.
///
/// The state starts as loading. Each fetch is tagged with a sequence
/// number; see [`ResponseOrdering`] for how overlapping fetches resolve.
pub struct Query<D, T> {
    fetcher: Fetcher<D, T>,
    deps: watch::Sender<D>,
    state: watch::Sender<FetchState<T>>,
    issued: AtomicU64,
    ordering: ResponseOrdering,
}

impl<D, T> std::fmt::Debug for Query<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("issued", &self.issued.load(Ordering::Relaxed))
            .field("ordering", &self.ordering)
            .finish_non_exhaustive()
    }
}

impl<D, T> Query<D, T>
where
    D: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Creates a query over `fetcher` with initial dependencies `deps`.
    pub fn new<F, Fut>(deps: D, fetcher: F) -> Self
    where
        F: Fn(D) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApiResponse<T>> + Send + 'static,
    {
        Self {
            fetcher: Arc::new(move |deps| -> BoxFuture<ApiResponse<T>> {
                Box::pin(fetcher(deps))
            }),
            deps: watch::Sender::new(deps),
            state: watch::Sender::new(FetchState::pending()),
            issued: AtomicU64::new(0),
            ordering: ResponseOrdering::default(),
        }
    }

    /// Sets the overlap policy.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Returns a snapshot of the state.
    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Returns the current dependencies.
    #[must_use]
    pub fn dependencies(&self) -> D {
        self.deps.borrow().clone()
    }

    /// Replaces the dependencies. Returns true if they changed, in which
    /// case a running driver issues a new fetch.
    pub fn set_dependencies(&self, deps: D) -> bool {
        self.deps.send_if_modified(|current| {
            if *current == deps {
                false
            } else {
                *current = deps;
                true
            }
        })
    }

    /// Fetches with the current dependencies and applies the answer.
    ///
    /// Previous data stays visible while loading. A failure clears it.
    pub async fn refetch(&self) {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(FetchState::begin);

        let deps = self.deps.borrow().clone();
        let response = (self.fetcher)(deps).await;
        self.apply(seq, response);
    }

    fn apply(&self, seq: u64, response: ApiResponse<T>) {
        if self.ordering == ResponseOrdering::LatestIssued
            && seq < self.issued.load(Ordering::SeqCst)
        {
            debug!(seq, "discarding superseded response");
            return;
        }

        let next = match response.into_result() {
            Ok(data) => FetchState::resolved(data),
            Err(error) => FetchState::failed(error.message),
        };
        self.state.send_replace(next);
    }

    /// Drives the query from the session and its dependencies.
    ///
    /// A fetch is issued whenever the dependencies change or the bearer
    /// token appears or changes, and only while a token is present.
    /// Fetches run concurrently with the driver. Returns when the session
    /// channel closes.
    pub async fn run(self: Arc<Self>, mut session: watch::Receiver<Session>) {
        let mut deps = self.deps.subscribe();
        let mut deps_dirty = true;
        let mut last_token: Option<String> = None;

        loop {
            let token = session
                .borrow_and_update()
                .bearer_token()
                .map(str::to_string);

            if token.is_some() && (deps_dirty || token != last_token) {
                deps_dirty = false;
                let query = Arc::clone(&self);
                tokio::spawn(async move { query.refetch().await });
            }
            last_token = token;

            tokio::select! {
                changed = session.changed() => {
                    if changed.is_err() {
                        debug!("session closed, stopping query driver");
                        break;
                    }
                }
                changed = deps.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    deps.borrow_and_update();
                    deps_dirty = true;
                }
            }
        }
    }
}
