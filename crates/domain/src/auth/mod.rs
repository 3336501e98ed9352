//! Authentication and session domain types

mod types;

pub use types::{
    AUTHENTICATION_FAILED, AuthError, AuthenticatedSession, Credentials, Session, SessionClaims,
    SessionStatus,
};
