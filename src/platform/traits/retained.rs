//! Retained memory interface
//!
//! A small record survives deep sleep in memory that stays powered while the
//! rest of the chip is off. It is written right before sleeping and read back
//! after wake-up.
//!
//! # Layout
//!
//! ```text
//! start_time     i64   Unix seconds when sleep was requested
//! duration_secs  u32   Requested sleep duration
//! check          u16   SLEEP_CHECK_ID when the sleep fields are valid
//! boot_count     u32   Boots since the retained region was last cleared
//! ```
//!
//! Retained memory that was never written (first power-on) has `check == 0`,
//! so the sleep fields are ignored until a sleep record is stored.

/// Marker written to `SleepState::check` together with a sleep record
pub const SLEEP_CHECK_ID: u16 = 0x5AC3;

/// Sleep record kept across deep sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct SleepState {
    /// Unix seconds when sleep was requested
    pub start_time: i64,
    /// Requested sleep duration in seconds
    pub duration_secs: u32,
    /// Validity marker, `SLEEP_CHECK_ID` when the fields above can be trusted
    pub check: u16,
}

impl SleepState {
    /// Build a valid sleep record
    pub const fn new(start_time: i64, duration_secs: u32) -> Self {
        Self {
            start_time,
            duration_secs,
            check: SLEEP_CHECK_ID,
        }
    }

    /// An empty, invalid record
    pub const fn empty() -> Self {
        Self {
            start_time: 0,
            duration_secs: 0,
            check: 0,
        }
    }

    /// Whether the record carries the validity marker
    pub fn is_valid(&self) -> bool {
        self.check == SLEEP_CHECK_ID
    }

    /// Unix time at which the timer wake-up was scheduled
    pub fn wake_time(&self) -> i64 {
        self.start_time.saturating_add(self.duration_secs as i64)
    }
}

/// Complete retained region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct RetainedData {
    /// Last sleep record
    pub sleep: SleepState,
    /// Boot counter
    pub boot_count: u32,
}

impl RetainedData {
    /// Retained region as left by a cold power-on
    pub const fn empty() -> Self {
        Self {
            sleep: SleepState::empty(),
            boot_count: 0,
        }
    }
}

/// Retained storage trait
///
/// Implementations back the record with whatever memory the target keeps
/// powered across deep sleep (RTC slow memory on ESP32).
///
/// # Safety Invariants
///
/// - `store` must be complete before the caller enters deep sleep
/// - Only one owner per retained region
pub trait RetainedStorage {
    /// Read the retained region
    fn load(&self) -> RetainedData;

    /// Overwrite the retained region
    fn store(&mut self, data: &RetainedData);
}
