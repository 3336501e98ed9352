//! Fetch state types for UI binding.
//!
//! This module defines the observable state of a data-fetch or mutation,
//! enabling the UI to show a spinner, the data, or an error message.

use serde::{Deserialize, Serialize};

/// The observable state of a query or mutation.
///
/// - `loading`: a call is in flight, show a spinner
/// - `data`: the last successful payload
/// - `error`: the message of the last failure
///
/// `data` and `error` are never both set after a call resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchState<T> {
    /// Last successfully fetched payload.
    pub data: Option<T>,
    /// Whether a call is currently in flight.
    pub loading: bool,
    /// User-facing message of the last failure.
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    /// Initial state of a query: nothing fetched yet, loading.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// Initial state of a mutation: nothing in flight.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// State after a successful call.
    #[must_use]
    pub const fn resolved(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    /// State after a failed call. Previous data is dropped.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(message.into()),
        }
    }

    /// Marks the state as loading again, keeping any previous data.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Returns true if the last call failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Result handed back to the caller of a mutation for immediate branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<T> {
    /// The call succeeded with this payload.
    Success(T),
    /// The call failed with this user-facing message.
    Failure(String),
}

impl<T> MutationOutcome<T> {
    /// Returns true for [`MutationOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the payload of a successful call.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the message of a failed call.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pending_is_loading() {
        let state = FetchState::<u32>::pending();
        assert!(state.loading);
        assert!(state.data.is_none());
        assert!(!state.is_error());
    }

    #[test]
    fn test_begin_keeps_previous_data() {
        let mut state = FetchState::resolved(vec![1, 2]);
        state.error = Some("old".to_string());
        state.begin();

        assert!(state.loading);
        assert_eq!(state.data, Some(vec![1, 2]));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_clears_data() {
        let state = FetchState::<u32>::failed("HTTP 500");
        assert!(!state.loading);
        assert!(state.data.is_none());
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_mutation_outcome_accessors() {
        let ok = MutationOutcome::Success(7);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&7));
        assert_eq!(ok.error(), None);

        let err = MutationOutcome::<u32>::Failure("nope".to_string());
        assert!(!err.is_success());
        assert_eq!(err.error(), Some("nope"));
    }
}
