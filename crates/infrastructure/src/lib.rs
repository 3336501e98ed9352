//! PlanEats Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;
pub mod session;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use config::{ClientConfig, ConfigError, DEFAULT_API_URL};
pub use persistence::{FileSandboxRepository, FileSessionStore};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
pub use session::{DEV_SESSION_SECRET, SealedSessionCodec};
