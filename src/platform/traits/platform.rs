//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates all chip-level interfaces.

use super::{
    ChipInterface, ClockInterface, PowerBusInterface, PowerInterface, RetainedStorage,
    StatusFlags, UartInterface,
};
use crate::platform::Result;

/// Root platform trait
///
/// This trait aggregates the platform-specific interfaces the CPU facade talks to.
///
/// Platform implementations provide concrete types for each interface via
/// associated types, enabling zero-cost abstractions through compile-time dispatch.
///
/// # Example
///
/// ```ignore
/// pub struct Esp32Platform {
///     // Platform state
/// }
///
/// impl Platform for Esp32Platform {
///     type Chip = Esp32Chip;
///     type Power = Esp32Power;
///     // ... other associated types
///
///     fn init() -> Result<Self> {
///         Ok(Self { /* ... */ })
///     }
///
///     // ... accessors
/// }
/// ```
pub trait Platform: Sized {
    /// Identification registers
    type Chip: ChipInterface;

    /// Restart and deep-sleep primitives
    type Power: PowerInterface;

    /// UART quiescing
    type Uart: UartInterface;

    /// External power bus
    type PowerBus: PowerBusInterface;

    /// Memory retained across deep sleep
    type Retained: RetainedStorage;

    /// Wall clock
    type Clock: ClockInterface;

    /// Initialize the platform
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the hardware was already
    /// handed out.
    fn init() -> Result<Self>;

    /// Get identification registers
    fn chip(&self) -> &Self::Chip;

    /// Get mutable power primitives
    fn power_mut(&mut self) -> &mut Self::Power;

    /// Get mutable UART control
    fn uart_mut(&mut self) -> &mut Self::Uart;

    /// Get mutable power bus control
    fn power_bus_mut(&mut self) -> &mut Self::PowerBus;

    /// Get retained storage
    fn retained(&self) -> &Self::Retained;

    /// Get mutable retained storage
    fn retained_mut(&mut self) -> &mut Self::Retained;

    /// Get wall clock
    fn clock(&self) -> &Self::Clock;

    /// Current global status flags
    fn status(&self) -> StatusFlags;
}
