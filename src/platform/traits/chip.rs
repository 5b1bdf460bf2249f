//! Chip identification interface
//!
//! Read-only access to the registers that identify the silicon and record why
//! it last came out of reset.

use crate::platform::Result;

/// Length of the flash unique identifier in bytes
pub const FLASH_UNIQUE_ID_LEN: usize = 8;

/// Bit position of the chip version field in the efuse version word
pub const EFUSE_CHIP_VER_SHIFT: u32 = 12;

/// Width mask of the chip version field (after shifting)
pub const EFUSE_CHIP_VER_MASK: u32 = 0x7;

/// Chip identification interface
///
/// Every method is a plain register read. Implementations perform no
/// validation: whatever the hardware holds is returned.
pub trait ChipInterface {
    /// Raw efuse word that carries the chip version field
    ///
    /// On ESP32 this is `EFUSE_BLK0_RDATA3`. The facade extracts the revision
    /// from it, so implementations must return the whole word.
    fn efuse_version_word(&self) -> u32;

    /// Raw reset-cause code recorded for the PRO CPU
    fn reset_cause(&self) -> u32;

    /// Unique identifier of the attached SPI flash chip
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Flash` if the flash chip cannot be queried.
    fn flash_unique_id(&self) -> Result<[u8; FLASH_UNIQUE_ID_LEN]>;
}
