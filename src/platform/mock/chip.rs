//! Mock chip identification registers

use crate::platform::{
    error::FlashError,
    traits::{ChipInterface, EFUSE_CHIP_VER_SHIFT, FLASH_UNIQUE_ID_LEN},
    Result,
};

/// Mock identification registers
///
/// Register values are plain fields a test sets before exercising the facade.
#[derive(Debug, Clone)]
pub struct MockChip {
    efuse_word: u32,
    reset_cause: u32,
    flash_id: Option<[u8; FLASH_UNIQUE_ID_LEN]>,
}

impl MockChip {
    /// Revision 1 silicon, last reset by power-on, no flash id support
    pub fn new() -> Self {
        Self {
            efuse_word: 1 << EFUSE_CHIP_VER_SHIFT,
            reset_cause: 1,
            flash_id: None,
        }
    }

    /// Set the raw efuse version word
    pub fn set_efuse_word(&mut self, word: u32) {
        self.efuse_word = word;
    }

    /// Set the chip version field, leaving other efuse bits clear
    pub fn set_revision(&mut self, revision: u32) {
        self.efuse_word = revision << EFUSE_CHIP_VER_SHIFT;
    }

    /// Set the raw reset-cause code
    pub fn set_reset_cause(&mut self, code: u32) {
        self.reset_cause = code;
    }

    /// Set the flash unique id, or `None` for a flash chip without the command
    pub fn set_flash_id(&mut self, id: Option<[u8; FLASH_UNIQUE_ID_LEN]>) {
        self.flash_id = id;
    }
}

impl Default for MockChip {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipInterface for MockChip {
    fn efuse_version_word(&self) -> u32 {
        self.efuse_word
    }

    fn reset_cause(&self) -> u32 {
        self.reset_cause
    }

    fn flash_unique_id(&self) -> Result<[u8; FLASH_UNIQUE_ID_LEN]> {
        self.flash_id.ok_or(FlashError::Unsupported.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;

    #[test]
    fn test_mock_chip_defaults() {
        let chip = MockChip::new();
        assert_eq!(chip.efuse_version_word(), 0x1000);
        assert_eq!(chip.reset_cause(), 1);
        assert_eq!(
            chip.flash_unique_id(),
            Err(PlatformError::Flash(FlashError::Unsupported))
        );
    }

    #[test]
    fn test_mock_chip_setters() {
        let mut chip = MockChip::new();
        chip.set_revision(5);
        chip.set_reset_cause(12);
        chip.set_flash_id(Some([1, 2, 3, 4, 5, 6, 7, 8]));

        assert_eq!(chip.efuse_version_word(), 5 << 12);
        assert_eq!(chip.reset_cause(), 12);
        assert_eq!(chip.flash_unique_id(), Ok([1, 2, 3, 4, 5, 6, 7, 8]));
    }
}
