//! ESP32 restart and deep-sleep primitives

use super::ffi;
use crate::platform::{error::SleepError, traits::PowerInterface, Result};

/// ESP-IDF power primitives
#[derive(Debug)]
pub struct Esp32Power {
    _private: (),
}

impl Esp32Power {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl PowerInterface for Esp32Power {
    fn keep_rtc_slow_mem(&mut self) -> Result<()> {
        // SAFETY: plain configuration call, no pointers involved
        let err = unsafe {
            ffi::esp_sleep_pd_config(ffi::ESP_PD_DOMAIN_RTC_SLOW_MEM, ffi::ESP_PD_OPTION_ON)
        };
        if err != ffi::ESP_OK {
            return Err(SleepError::DomainConfigFailed(err).into());
        }
        Ok(())
    }

    fn deep_sleep(&mut self, duration_us: u64) -> ! {
        // SAFETY: the SDK powers the chip down; nothing runs after this
        unsafe { ffi::esp_deep_sleep(duration_us) }
    }

    fn restart(&mut self) -> ! {
        // SAFETY: the SDK resets the chip; nothing runs after this
        unsafe { ffi::esp_restart() }
    }
}
