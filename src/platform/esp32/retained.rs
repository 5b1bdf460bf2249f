//! RTC slow memory retained region

use crate::platform::traits::{RetainedData, RetainedStorage};

/// Retained record, placed in RTC slow memory
///
/// `.rtc.data` is initialized from the app image on power-on and left
/// untouched on deep-sleep wake. The initializer is all zeros, which reads as
/// "no sleep record".
#[link_section = ".rtc.data"]
static mut RETAINED: RetainedData = RetainedData::empty();

/// Handle to the retained region
///
/// Only `Esp32Platform::init` creates one, and only once.
#[derive(Debug)]
pub struct Esp32Retained {
    _private: (),
}

impl Esp32Retained {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl RetainedStorage for Esp32Retained {
    fn load(&self) -> RetainedData {
        // SAFETY: single handle; `&self` excludes concurrent `store`
        unsafe { core::ptr::read_volatile(core::ptr::addr_of!(RETAINED)) }
    }

    fn store(&mut self, data: &RetainedData) {
        // SAFETY: single handle, exclusive through `&mut self`
        unsafe { core::ptr::write_volatile(core::ptr::addr_of_mut!(RETAINED), *data) }
    }
}
