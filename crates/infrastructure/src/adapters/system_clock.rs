//! System clock adapter

use chrono::{DateTime, Utc};
use planeats_application::ports::Clock;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_matches_now() {
        let clock = SystemClock;
        let before = Utc::now().date_naive();
        let today = clock.today();
        assert!(today >= before);
        assert!(clock.now().timestamp() > 0);
    }
}
