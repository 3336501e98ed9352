//! ID generation utilities.

use uuid::Uuid;

/// Generates a new time-ordered identifier (UUID v7) as a string.
///
/// Used for every record created locally in the sandbox.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
