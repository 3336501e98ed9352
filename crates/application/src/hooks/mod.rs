//! Data-fetch state containers
//!
//! Observable `{data, loading, error}` state for reads ([`Query`]) and
//! writes ([`Mutation`]), plus [`SyncedList`] for resource lists that apply
//! the server's answer locally. State lives in `tokio::sync::watch`
//! channels so any number of views can subscribe.

mod mutation;
mod query;
mod synced_list;

pub use mutation::Mutation;
pub use query::{Query, ResponseOrdering};
pub use synced_list::{ListState, SyncedList};
