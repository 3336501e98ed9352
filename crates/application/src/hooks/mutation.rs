//! One-shot write with observable state.

use std::future::Future;

use planeats_domain::{ApiResponse, FetchState, MutationOutcome};
use tokio::sync::watch;

/// Runs a call once per [`mutate`](Self::mutate) and exposes its state.
///
/// Starts idle. Never retries.
#[derive(Debug)]
pub struct Mutation<T> {
    state: watch::Sender<FetchState<T>>,
}

impl<T: Clone> Default for Mutation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Mutation<T> {
    /// Creates an idle mutation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(FetchState::idle()),
        }
    }

    /// Invokes `call` with `params` and records the answer.
    pub async fn mutate<P, F, Fut>(&self, call: F, params: P) -> MutationOutcome<T>
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = ApiResponse<T>>,
    {
        self.state.send_modify(FetchState::begin);

        match call(params).await.into_result() {
            Ok(data) => {
                self.state.send_replace(FetchState::resolved(data.clone()));
                MutationOutcome::Success(data)
            }
            Err(error) => {
                self.state
                    .send_replace(FetchState::failed(error.message.clone()));
                MutationOutcome::Failure(error.message)
            }
        }
    }

    /// Returns to the idle state.
    pub fn reset(&self) {
        self.state.send_replace(FetchState::idle());
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
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use planeats_domain::{ApiError, ApiErrorKind};
    use pretty_assertions::assert_eq;

    async fn add_item(name: String) -> ApiResponse<String> {
        if name.is_empty() {
            ApiResponse::error(ApiError::new(ApiErrorKind::Client, "name is required"), 422)
        } else {
            ApiResponse::data(name, 201)
        }
    }

    #[tokio::test]
    async fn test_success_and_failure_outcomes() {
        let mutation = Mutation::new();
        assert_eq!(mutation.state(), FetchState::idle());

        let outcome = mutation.mutate(add_item, "Milk".to_string()).await;
        assert_eq!(outcome, MutationOutcome::Success("Milk".to_string()));
        assert_eq!(mutation.state(), FetchState::resolved("Milk".to_string()));

        let outcome = mutation.mutate(add_item, String::new()).await;
        assert_eq!(outcome.error(), Some("name is required"));
        assert_eq!(mutation.state(), FetchState::failed("name is required"));

        mutation.reset();
        assert_eq!(mutation.state(), FetchState::idle());
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_in_flight() {
        let mutation = Mutation::<u32>::new();
        let rx = mutation.subscribe();

        let outcome = mutation
            .mutate(
                |n: u32| {
                    let seen = rx.borrow().loading;
                    async move { ApiResponse::data(if seen { n } else { 0 }, 200) }
                },
                5,
            )
            .await;
        assert_eq!(outcome, MutationOutcome::Success(5));
        assert!(!mutation.state().loading);
    }
}
