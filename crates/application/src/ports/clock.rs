//! Clock port

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time.
///
/// Session expiry and sandbox timestamps read the time through this port
/// so tests can pin it.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
