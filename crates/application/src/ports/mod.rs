//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod credentials;
mod http_client;
mod sandbox_repository;
mod session;

pub use clock::Clock;
pub use credentials::{CredentialSource, NoCredentials};
pub use http_client::{HttpClient, HttpClientError, HttpRequest};
pub use sandbox_repository::{SandboxRepository, SandboxStoreError};
pub use session::{SessionCodec, SessionCodecError, SessionStore, SessionStoreError};
