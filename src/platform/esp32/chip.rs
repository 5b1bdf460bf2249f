//! ESP32 identification registers

use super::ffi;
use crate::platform::{
    error::FlashError,
    traits::{ChipInterface, FLASH_UNIQUE_ID_LEN},
    Result,
};

/// ESP32 efuse and reset-cause registers
#[derive(Debug)]
pub struct Esp32Chip {
    _private: (),
}

impl Esp32Chip {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl ChipInterface for Esp32Chip {
    fn efuse_version_word(&self) -> u32 {
        // SAFETY: fixed, always-readable efuse register
        unsafe { core::ptr::read_volatile(ffi::EFUSE_BLK0_RDATA3_REG as *const u32) }
    }

    fn reset_cause(&self) -> u32 {
        // SAFETY: ROM routine, reads the RTC reset-cause register of the PRO CPU
        unsafe { ffi::rtc_get_reset_reason(0) }
    }

    fn flash_unique_id(&self) -> Result<[u8; FLASH_UNIQUE_ID_LEN]> {
        let mut id: u64 = 0;
        // SAFETY: a null chip selects the default flash chip; `id` outlives the call
        let err = unsafe { ffi::esp_flash_read_unique_chip_id(core::ptr::null_mut(), &mut id) };
        if err != ffi::ESP_OK {
            return Err(FlashError::ReadIdFailed(err).into());
        }
        // The SDK packs the id with the first byte read in the most significant position
        Ok(id.to_be_bytes())
    }
}
