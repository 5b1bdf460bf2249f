//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the chip family the facade runs on.
//! All chip-specific register access and SDK calls are isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "esp32")]
pub mod esp32;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    ChipInterface, ClockInterface, Platform, PowerBusInterface, PowerInterface, RetainedStorage,
    UartInterface,
};
