//! Wall-clock interface

/// Wall-clock interface trait
///
/// Supplies the timestamp stored in the sleep record.
pub trait ClockInterface {
    /// Seconds since the Unix epoch as kept by the system RTC
    ///
    /// Returns whatever the RTC holds; an unset clock typically reads close to 0.
    fn now_unix(&self) -> i64;
}
