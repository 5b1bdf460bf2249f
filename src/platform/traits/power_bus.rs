//! External power bus interface
//!
//! Boards may switch power to external sensors through a GPIO-driven load
//! switch. It must be turned off before deep sleep.

use crate::platform::Result;

/// Power bus interface trait
pub trait PowerBusInterface {
    /// Select the GPIO that drives the load switch
    fn set_pin(&mut self, pin: u8);

    /// Switch the external power bus off
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::PowerBus` if no control pin was selected or
    /// the pin cannot be driven.
    fn off(&mut self) -> Result<()>;

    /// Whether the bus is currently powered
    fn is_on(&self) -> bool;
}
