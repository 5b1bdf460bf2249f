//! Shared call journal for mock peripherals
//!
//! Every mock component records what it was asked to do into one journal, so a
//! test can check the order of calls across peripherals.

use crate::platform::traits::{RetainedData, UartUnit};
use core::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::vec::Vec;

/// A call observed by a mock peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEvent {
    /// Power bus switched off through the given pin
    PowerBusOff(u8),
    /// UART units stopped
    UartStop(UartUnit),
    /// RTC slow memory kept powered for the next sleep
    KeepRtcSlowMem,
    /// Retained region overwritten
    RetainedStore(RetainedData),
    /// Deep sleep entered, with the retained region as it was at that moment
    DeepSleep {
        duration_us: u64,
        retained: RetainedData,
    },
    /// Chip restarted
    Restart,
}

/// Payload a mock terminal call unwinds with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockHalt {
    /// `PowerInterface::deep_sleep` was called
    DeepSleep { duration_us: u64 },
    /// `PowerInterface::restart` was called
    Restart,
}

/// Ordered record of mock calls, shared between mock components
#[derive(Debug, Clone, Default)]
pub struct MockJournal {
    events: Rc<RefCell<Vec<MockEvent>>>,
}

impl MockJournal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn record(&self, event: MockEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of all events so far, oldest first
    pub fn events(&self) -> Vec<MockEvent> {
        self.events.borrow().clone()
    }

    /// Index of the first event matching `pred`
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: Fn(&MockEvent) -> bool,
    {
        self.events.borrow().iter().position(pred)
    }

    /// Number of events matching `pred`
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&MockEvent) -> bool,
    {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    /// Forget all recorded events
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Run `f`, which must end in a mock terminal call, and return how it halted
///
/// # Panics
///
/// Panics if `f` returns normally. Any panic that is not a `MockHalt` is
/// propagated unchanged.
pub fn catch_halt<F: FnOnce()>(f: F) -> MockHalt {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("expected a terminal power call"),
        Err(payload) => match payload.downcast::<MockHalt>() {
            Ok(halt) => *halt,
            Err(other) => panic::resume_unwind(other),
        },
    }
}
