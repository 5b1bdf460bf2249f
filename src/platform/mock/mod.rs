//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use esp32_cpu::platform::mock::{catch_halt, MockEvent, MockHalt, MockPlatform};
//! use esp32_cpu::platform::traits::{Platform, PowerInterface};
//!
//! let mut platform = MockPlatform::new();
//! let halt = catch_halt(|| platform.power_mut().restart());
//! assert_eq!(halt, MockHalt::Restart);
//! assert_eq!(platform.journal().events(), vec![MockEvent::Restart]);
//! ```

#![cfg(any(test, feature = "mock"))]

mod chip;
mod clock;
mod journal;
mod platform;
mod power;
mod power_bus;
mod retained;
mod uart;

pub use chip::MockChip;
pub use clock::MockClock;
pub use journal::{catch_halt, MockEvent, MockHalt, MockJournal};
pub use platform::MockPlatform;
pub use power::MockPower;
pub use power_bus::MockPowerBus;
pub use retained::MockRetained;
pub use uart::MockUart;
