//! System RTC wall clock

use super::ffi;
use crate::platform::traits::ClockInterface;

/// Wall clock backed by newlib `time()`
#[derive(Debug)]
pub struct Esp32Clock {
    _private: (),
}

impl Esp32Clock {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl ClockInterface for Esp32Clock {
    fn now_unix(&self) -> i64 {
        // SAFETY: null `tloc` is allowed
        unsafe { ffi::time(core::ptr::null_mut()) }
    }
}
