//! Session management
//!
//! The [`SessionProvider`] owns the current [`Session`](planeats_domain::Session),
//! publishes changes through a `watch` channel and supplies the bearer
//! token to the API client.

mod memory_store;
mod provider;

pub use memory_store::MemorySessionStore;
pub use provider::SessionProvider;
