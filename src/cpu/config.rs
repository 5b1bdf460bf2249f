//! CPU facade configuration
//!
//! Board options are decided at build time (see `build.rs`) and resolved into a
//! plain struct at startup, so every optional behavior is a runtime check on a
//! field rather than a compile-time switch.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CHIP_FAMILY` | `family` | `ESP32` |
//! | `CPU_FREQ_MHZ` | `speed_mhz` | `240` |
//! | `USE_POWER_BUS` | `has_power_bus` | `false` |
//! | `POWER_BUS_PIN` | `power_bus_pin` | `0` |
//! | `READ_FLASH_UNIQUE_ID` | `report_flash_id` | `false` |

use crate::platform::{PlatformError, Result};

/// Microseconds per second, the deep-sleep timer unit
pub const US_PER_SEC: u64 = 1_000_000;

/// CPU frequencies the ESP32 clock tree supports
pub const SUPPORTED_SPEEDS_MHZ: [u32; 3] = [80, 160, 240];

/// Runtime configuration of the CPU facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Family name used in the model string
    pub family: &'static str,
    /// Configured CPU clock in MHz
    pub speed_mhz: u32,
    /// Board has an external power bus that must be cut before sleeping
    pub has_power_bus: bool,
    /// GPIO driving the power bus load switch
    pub power_bus_pin: u8,
    /// Log the flash unique id in `report_flash_id`
    pub report_flash_id: bool,
    /// Deep-sleep timer ticks per requested second
    pub sleep_us_per_sec: u64,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            family: "ESP32",
            speed_mhz: 240,
            has_power_bus: false,
            power_bus_pin: 0,
            report_flash_id: false,
            sleep_us_per_sec: US_PER_SEC,
        }
    }
}

impl CpuConfig {
    /// Configuration baked in by `build.rs`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if a build variable does not parse
    /// or the result fails [`CpuConfig::validate`].
    pub fn from_build() -> Result<Self> {
        Self::from_values(
            env!("CHIP_FAMILY"),
            env!("CPU_FREQ_MHZ"),
            env!("USE_POWER_BUS"),
            env!("POWER_BUS_PIN"),
            env!("READ_FLASH_UNIQUE_ID"),
        )
    }

    /// Build a configuration from its textual settings
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` on any unparsable or out-of-range value.
    pub fn from_values(
        family: &'static str,
        speed_mhz: &str,
        use_power_bus: &str,
        power_bus_pin: &str,
        read_flash_id: &str,
    ) -> Result<Self> {
        let config = Self {
            family,
            speed_mhz: speed_mhz
                .trim()
                .parse()
                .map_err(|_| PlatformError::InvalidConfig)?,
            has_power_bus: parse_bool(use_power_bus)?,
            power_bus_pin: power_bus_pin
                .trim()
                .parse()
                .map_err(|_| PlatformError::InvalidConfig)?,
            report_flash_id: parse_bool(read_flash_id)?,
            sleep_us_per_sec: US_PER_SEC,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the hardware cannot honor
    ///
    /// An empty `family` is accepted; the identity report flags it instead.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if `speed_mhz` is not a supported
    /// CPU frequency or `sleep_us_per_sec` is zero.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_SPEEDS_MHZ.contains(&self.speed_mhz) {
            return Err(PlatformError::InvalidConfig);
        }
        if self.sleep_us_per_sec == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }

    /// Deep-sleep timer duration for `seconds`
    ///
    /// Saturates instead of wrapping for absurd calibrations.
    pub fn sleep_duration_us(&self, seconds: u32) -> u64 {
        (seconds as u64).saturating_mul(self.sleep_us_per_sec)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "" | "0" | "false" | "no" | "n" => Ok(false),
        _ => Err(PlatformError::InvalidConfig),
    }
}
