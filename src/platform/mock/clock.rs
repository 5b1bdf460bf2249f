//! Mock wall clock

use crate::platform::traits::ClockInterface;

/// Mock wall clock holding a settable Unix time
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: i64,
}

impl MockClock {
    /// Create a clock reading the epoch
    pub fn new() -> Self {
        Self { now: 0 }
    }

    /// Set the current Unix time
    pub fn set_now(&mut self, unix_secs: i64) {
        self.now = unix_secs;
    }

    /// Advance the clock
    pub fn advance(&mut self, secs: i64) {
        self.now = self.now.saturating_add(secs);
    }
}

impl ClockInterface for MockClock {
    fn now_unix(&self) -> i64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock() {
        let mut clock = MockClock::new();
        assert_eq!(clock.now_unix(), 0);

        clock.set_now(1_700_000_000);
        clock.advance(30);
        assert_eq!(clock.now_unix(), 1_700_000_030);
    }
}
