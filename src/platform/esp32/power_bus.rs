//! GPIO-switched external power bus

use super::ffi;
use crate::platform::{error::PowerBusError, traits::PowerBusInterface, Result};

/// Power bus load switch driven by one GPIO, active high
#[derive(Debug)]
pub struct Esp32PowerBus {
    pin: Option<u8>,
    on: bool,
}

impl Esp32PowerBus {
    pub(crate) fn new() -> Self {
        Self { pin: None, on: true }
    }
}

impl PowerBusInterface for Esp32PowerBus {
    fn set_pin(&mut self, pin: u8) {
        self.pin = Some(pin);
    }

    fn off(&mut self) -> Result<()> {
        let pin = self.pin.ok_or(PowerBusError::NotPresent)?;
        // SAFETY: the SDK validates the pin number
        let err = unsafe { ffi::gpio_set_level(i32::from(pin), 0) };
        if err != ffi::ESP_OK {
            return Err(PowerBusError::PinWriteFailed.into());
        }
        self.on = false;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
