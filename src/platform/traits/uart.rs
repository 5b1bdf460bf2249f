//! UART quiescing interface
//!
//! The facade never transfers data over UART. It only needs to silence the
//! units before the chip powers down so half-sent bytes do not show up as
//! garbage on the console.

use crate::platform::Result;

/// UART unit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartUnit {
    /// Every UART unit present on the chip
    All,
    /// A single unit by number
    Unit(u8),
}

/// UART interface trait
///
/// # Safety Invariants
///
/// - After `stop` returns `Ok`, the selected units have no pending TX data
/// - No concurrent access to the same UART from multiple contexts
pub trait UartInterface {
    /// Flush and stop the selected UART units
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::InvalidUnit)` for a unit the chip
    /// does not have and `PlatformError::Uart(UartError::FlushFailed)` if the
    /// transmitter never went idle.
    fn stop(&mut self, unit: UartUnit) -> Result<()>;
}
