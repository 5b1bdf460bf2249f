//! Mock restart and deep-sleep primitives

use super::{MockEvent, MockHalt, MockJournal};
use crate::platform::{error::SleepError, traits::PowerInterface, traits::RetainedData, Result};
use core::cell::RefCell;
use std::rc::Rc;

/// Mock power primitives
///
/// Terminal calls are journaled and then unwind with a `MockHalt` payload, the
/// host stand-in for "execution never continues". Use `catch_halt` to run them.
#[derive(Debug, Clone)]
pub struct MockPower {
    journal: MockJournal,
    retained: Rc<RefCell<RetainedData>>,
    domain_error: Option<i32>,
}

impl MockPower {
    /// Create mock power primitives observing `retained`
    pub(crate) fn new(journal: MockJournal, retained: Rc<RefCell<RetainedData>>) -> Self {
        Self {
            journal,
            retained,
            domain_error: None,
        }
    }

    /// Make `keep_rtc_slow_mem` fail with the given SDK error code
    pub fn set_domain_error(&mut self, code: Option<i32>) {
        self.domain_error = code;
    }
}

impl PowerInterface for MockPower {
    fn keep_rtc_slow_mem(&mut self) -> Result<()> {
        if let Some(code) = self.domain_error {
            return Err(SleepError::DomainConfigFailed(code).into());
        }
        self.journal.record(MockEvent::KeepRtcSlowMem);
        Ok(())
    }

    fn deep_sleep(&mut self, duration_us: u64) -> ! {
        let retained = *self.retained.borrow();
        self.journal.record(MockEvent::DeepSleep {
            duration_us,
            retained,
        });
        std::panic::panic_any(MockHalt::DeepSleep { duration_us })
    }

    fn restart(&mut self) -> ! {
        self.journal.record(MockEvent::Restart);
        std::panic::panic_any(MockHalt::Restart)
    }
}
