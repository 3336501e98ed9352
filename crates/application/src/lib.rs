//! PlanEats Application - Client use cases
//!
//! This crate holds the behaviour of the client core on top of ports that
//! the infrastructure layer implements:
//!
//! - [`ApiClient`]: the single authenticated gateway to the backend
//! - [`SessionProvider`]: credential login and reactive session state
//! - [`hooks`]: query, mutation and synced-list state containers
//! - [`Sandbox`]: the locally persisted demo dataset

pub mod client;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod sandbox;
pub mod session;

#[cfg(test)]
mod test_support;

pub use client::{API_PREFIX, ApiClient};
pub use error::{SandboxError, SandboxResult};
pub use hooks::{ListState, Mutation, Query, ResponseOrdering, SyncedList};
pub use sandbox::Sandbox;
pub use session::{MemorySessionStore, SessionProvider};
