//! Power-state transition interface
//!
//! Restart and deep sleep are terminal: on hardware the calling code never
//! runs again, the chip boots from scratch. Both are typed `-> !` so a caller
//! cannot write code that expects to resume after them.

use crate::platform::Result;

/// Power interface trait
pub trait PowerInterface {
    /// Keep the RTC slow memory domain powered during the next deep sleep
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Sleep(SleepError::DomainConfigFailed)` if the SDK
    /// rejects the power domain configuration.
    fn keep_rtc_slow_mem(&mut self) -> Result<()>;

    /// Enter deep sleep, waking after `duration_us` microseconds
    ///
    /// Wake-up is a reset: execution restarts at the boot code.
    fn deep_sleep(&mut self, duration_us: u64) -> !;

    /// Software restart of the whole chip
    fn restart(&mut self) -> !;
}
