//! File-backed persistence
//!
//! Both stores live in the client data directory:
//! - `session`: the sealed session token
//! - `planeats-storage.json`: the sandbox snapshot

mod file_sandbox_repository;
mod file_session_store;

pub use file_sandbox_repository::FileSandboxRepository;
pub use file_session_store::FileSessionStore;
