//! PlanEats Domain - Core client types
//!
//! This crate defines the domain model for the PlanEats client: request
//! descriptors, the normalized result envelope, session state, backend wire
//! models and the local sandbox dataset.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod id;
pub mod models;
pub mod request;
pub mod response;
pub mod sandbox;
pub mod state;

pub use auth::{
    AUTHENTICATION_FAILED, AuthError, AuthenticatedSession, Credentials, Session, SessionClaims,
    SessionStatus,
};
pub use envelope::{ApiError, ApiErrorKind, ApiResponse};
pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use request::{ApiRequest, Header, Headers, HttpMethod, QueryParams, RequestBody};
pub use response::{ResponseSpec, StatusCode};
pub use sandbox::SandboxState;
pub use state::{FetchState, MutationOutcome};
