//! ESP32 Platform implementation
//!
//! This module provides the root Platform trait implementation for ESP32.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::platform::{
    error::PlatformError,
    traits::{Platform, StatusFlags},
    Result,
};

use super::{Esp32Chip, Esp32Clock, Esp32Power, Esp32PowerBus, Esp32Retained, Esp32Uart};

/// Set once the platform has been handed out
static TAKEN: AtomicBool = AtomicBool::new(false);

/// Global status bits
static STATUS: AtomicU32 = AtomicU32::new(0);

/// Raise status flags
pub fn status_set(flags: StatusFlags) {
    STATUS.fetch_or(flags.bits(), Ordering::AcqRel);
}

/// Current status flags
pub fn status_get() -> StatusFlags {
    StatusFlags::from_bits_truncate(STATUS.load(Ordering::Acquire))
}

/// ESP32 Platform implementation
///
/// Owns the handles to every chip resource the facade touches. Only one
/// instance can exist because the retained region must have a single writer.
#[derive(Debug)]
pub struct Esp32Platform {
    chip: Esp32Chip,
    power: Esp32Power,
    uart: Esp32Uart,
    power_bus: Esp32PowerBus,
    retained: Esp32Retained,
    clock: Esp32Clock,
}

impl Esp32Platform {
    fn new() -> Self {
        Self {
            chip: Esp32Chip::new(),
            power: Esp32Power::new(),
            uart: Esp32Uart::new(),
            power_bus: Esp32PowerBus::new(),
            retained: Esp32Retained::new(),
            clock: Esp32Clock::new(),
        }
    }
}

impl Platform for Esp32Platform {
    type Chip = Esp32Chip;
    type Power = Esp32Power;
    type Uart = Esp32Uart;
    type PowerBus = Esp32PowerBus;
    type Retained = Esp32Retained;
    type Clock = Esp32Clock;

    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` on a second call.
    fn init() -> Result<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return Err(PlatformError::ResourceUnavailable);
        }
        Ok(Self::new())
    }

    fn chip(&self) -> &Self::Chip {
        &self.chip
    }

    fn power_mut(&mut self) -> &mut Self::Power {
        &mut self.power
    }

    fn uart_mut(&mut self) -> &mut Self::Uart {
        &mut self.uart
    }

    fn power_bus_mut(&mut self) -> &mut Self::PowerBus {
        &mut self.power_bus
    }

    fn retained(&self) -> &Self::Retained {
        &self.retained
    }

    fn retained_mut(&mut self) -> &mut Self::Retained {
        &mut self.retained
    }

    fn clock(&self) -> &Self::Clock {
        &self.clock
    }

    fn status(&self) -> StatusFlags {
        status_get()
    }
}
