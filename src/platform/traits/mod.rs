//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod chip;
pub mod clock;
pub mod platform;
pub mod power;
pub mod power_bus;
pub mod retained;
pub mod status;
pub mod uart;

// Re-export trait interfaces
pub use chip::{
    ChipInterface, EFUSE_CHIP_VER_MASK, EFUSE_CHIP_VER_SHIFT, FLASH_UNIQUE_ID_LEN,
};
pub use clock::ClockInterface;
pub use platform::Platform;
pub use power::PowerInterface;
pub use power_bus::PowerBusInterface;
pub use retained::{RetainedData, RetainedStorage, SleepState, SLEEP_CHECK_ID};
pub use status::StatusFlags;
pub use uart::{UartInterface, UartUnit};
