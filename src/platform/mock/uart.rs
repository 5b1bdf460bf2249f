//! Mock UART implementation for testing

use super::{MockEvent, MockJournal};
use crate::platform::{
    error::UartError,
    traits::{UartInterface, UartUnit},
    Result,
};

/// Mock UART control
///
/// Records every successful stop in the journal. A flush failure can be
/// injected to exercise the facade's error path.
#[derive(Debug, Clone)]
pub struct MockUart {
    journal: MockJournal,
    units: u8,
    fail_flush: bool,
}

impl MockUart {
    /// Number of UART units on an ESP32
    pub const UNITS: u8 = 3;

    /// Create mock UART control sharing `journal`
    pub fn new(journal: MockJournal) -> Self {
        Self {
            journal,
            units: Self::UNITS,
            fail_flush: false,
        }
    }

    /// Make the next stops fail with `UartError::FlushFailed`
    pub fn set_fail_flush(&mut self, fail: bool) {
        self.fail_flush = fail;
    }
}

impl UartInterface for MockUart {
    fn stop(&mut self, unit: UartUnit) -> Result<()> {
        if let UartUnit::Unit(n) = unit {
            if n >= self.units {
                return Err(UartError::InvalidUnit.into());
            }
        }
        if self.fail_flush {
            return Err(UartError::FlushFailed.into());
        }
        self.journal.record(MockEvent::UartStop(unit));
        Ok(())
    }
}
