//! Chip identity formatting

use core::fmt::Write;
use heapless::String;

use crate::platform::traits::{EFUSE_CHIP_VER_MASK, EFUSE_CHIP_VER_SHIFT, FLASH_UNIQUE_ID_LEN};

/// Capacity of a model string
pub const MODEL_LEN: usize = 40;

/// Length of a flash EUI rendered as hex
pub const EUI_HEX_LEN: usize = FLASH_UNIQUE_ID_LEN * 2;

/// Identity of the running chip, derived from registers on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipIdentity {
    /// `"<family> rev <N>"`
    pub model: String<MODEL_LEN>,
    /// Configured CPU clock in MHz
    pub speed_mhz: u32,
    /// Silicon revision
    pub revision: u32,
}

/// Extract the silicon revision from the efuse version word
pub fn chip_revision(efuse_word: u32) -> u32 {
    (efuse_word >> EFUSE_CHIP_VER_SHIFT) & EFUSE_CHIP_VER_MASK
}

/// Format `"<family> rev <revision>"`
///
/// A family name too long for [`MODEL_LEN`] yields a truncated string.
pub fn format_model(family: &str, revision: u32) -> String<MODEL_LEN> {
    let mut model = String::new();
    let _ = write!(model, "{} rev {}", family, revision);
    model
}

/// Render a flash unique id as lowercase hex, first byte first
pub fn format_eui(id: &[u8; FLASH_UNIQUE_ID_LEN]) -> String<EUI_HEX_LEN> {
    let mut eui = String::new();
    for byte in id {
        let _ = write!(eui, "{:02x}", byte);
    }
    eui
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_revision_field() {
        assert_eq!(chip_revision(0), 0);
        assert_eq!(chip_revision(0x5 << 12), 5);
        // Neighbouring efuse bits are ignored
        assert_eq!(chip_revision(0xFFFF_8FFF | (0x3 << 12)), 3);
    }

    #[test]
    fn test_format_model_all_revisions() {
        for revision in 0..=EFUSE_CHIP_VER_MASK {
            let model = format_model("ESP32", revision);
            assert_eq!(model.as_str(), format!("ESP32 rev {}", revision));
        }
    }

    #[test]
    fn test_format_model_family() {
        assert_eq!(format_model("ESP32-D0WD", 1).as_str(), "ESP32-D0WD rev 1");
        assert_eq!(format_model("ESP32", 42).as_str(), "ESP32 rev 42");
    }

    #[test]
    fn test_format_eui() {
        let eui = format_eui(&[0x00, 0x11, 0x22, 0x33, 0xaa, 0xbb, 0xcc, 0xff]);
        assert_eq!(eui.as_str(), "00112233aabbccff");
        assert_eq!(eui.len(), EUI_HEX_LEN);
    }
}
