//! CPU identity and power facade
//!
//! [`Cpu`] answers identity queries (model, clock speed, silicon revision,
//! reset cause, flash id) and performs the two terminal power transitions,
//! restart and deep sleep. It owns the platform and talks to the hardware only
//! through the [`Platform`] traits.
//!
//! # Example
//!
//! ```ignore
//! use esp32_cpu::cpu::{Cpu, CpuConfig};
//! use esp32_cpu::platform::esp32::Esp32Platform;
//! use esp32_cpu::platform::traits::Platform;
//!
//! let mut cpu = Cpu::new(Esp32Platform::init()?, CpuConfig::from_build()?);
//! cpu.record_boot();
//! cpu.report_identity();
//! cpu.report_flash_id();
//!
//! if let Some(sleep) = cpu.last_sleep() {
//!     // woke from a timed sleep
//! }
//!
//! cpu.enter_deep_sleep(60);
//! ```

pub mod config;
pub mod gpio;
pub mod identity;
pub mod reset;
mod sleep;

pub use config::CpuConfig;
pub use identity::{ChipIdentity, EUI_HEX_LEN, MODEL_LEN};
pub use reset::{ResetReason, REASON_LEN};

use heapless::String;

use crate::platform::{
    traits::{ChipInterface, PowerBusInterface},
    Platform, Result,
};
use crate::{log_error, log_info, log_trace, log_warn};

/// Identity and power facade over a platform
pub struct Cpu<P: Platform> {
    platform: P,
    config: CpuConfig,
}

impl<P: Platform> Cpu<P> {
    /// Wrap an initialized platform
    ///
    /// When the board has a power bus, its control pin is taken from `config`.
    pub fn new(mut platform: P, config: CpuConfig) -> Self {
        if config.has_power_bus {
            platform.power_bus_mut().set_pin(config.power_bus_pin);
        }
        Self { platform, config }
    }

    /// Initialize the platform and load the build-time configuration
    ///
    /// # Errors
    ///
    /// Propagates platform initialization failures and
    /// `PlatformError::InvalidConfig` from [`CpuConfig::from_build`].
    pub fn init() -> Result<Self> {
        let config = CpuConfig::from_build()?;
        let platform = P::init()?;
        Ok(Self::new(platform, config))
    }

    /// Active configuration
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Underlying platform
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Underlying platform, mutable
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Model string, `"<family> rev <revision>"`
    pub fn model(&self) -> String<MODEL_LEN> {
        identity::format_model(self.config.family, self.revision())
    }

    /// Configured CPU clock in MHz
    pub fn speed_mhz(&self) -> u32 {
        self.config.speed_mhz
    }

    /// Silicon revision from the efuse chip version field
    pub fn revision(&self) -> u32 {
        identity::chip_revision(self.platform.chip().efuse_version_word())
    }

    /// Model, speed and revision together
    pub fn identity(&self) -> ChipIdentity {
        ChipIdentity {
            model: self.model(),
            speed_mhz: self.speed_mhz(),
            revision: self.revision(),
        }
    }

    /// Log the model and clock speed
    pub fn report_identity(&self) {
        if self.config.family.is_empty() {
            log_error!("cpu unknown CPU");
        } else {
            log_info!("cpu {} at {} Mhz", self.model(), self.speed_mhz());
        }
    }

    /// Flash unique id as 16 lowercase hex digits
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Flash` if the flash chip cannot be queried.
    pub fn flash_eui(&self) -> Result<String<EUI_HEX_LEN>> {
        let id = self.platform.chip().flash_unique_id()?;
        Ok(identity::format_eui(&id))
    }

    /// Log the flash unique id, when enabled in the configuration
    pub fn report_flash_id(&self) {
        if !self.config.report_flash_id {
            return;
        }
        match self.flash_eui() {
            Ok(eui) => log_info!("flash EUI {}", eui),
            Err(e) => log_warn!("flash EUI unavailable: {}", e),
        }
    }

    /// Decoded cause of the last reset
    pub fn reset_reason(&self) -> ResetReason {
        ResetReason::from_code(self.platform.chip().reset_cause())
    }

    /// Raw reset-cause code, optionally describing it into `buf`
    ///
    /// `buf` is overwritten with the description of the code, `"Unknown"` for
    /// codes outside the table. The raw code is returned either way.
    pub fn reset_reasons(&self, buf: Option<&mut String<REASON_LEN>>) -> u32 {
        let code = self.platform.chip().reset_cause();
        log_trace!("cpu reset cause {}", code);
        if let Some(buf) = buf {
            buf.clear();
            let _ = buf.push_str(ResetReason::from_code(code).description());
        }
        code
    }
}
