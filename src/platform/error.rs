//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their SDK-specific error codes to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// UART operation failed
    Uart(UartError),
    /// Power bus operation failed
    PowerBus(PowerBusError),
    /// Flash identification failed
    Flash(FlashError),
    /// Sleep configuration failed
    Sleep(SleepError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// UART unit number does not exist on this chip
    InvalidUnit,
    /// Transmit FIFO did not drain
    FlushFailed,
}

/// Power bus errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerBusError {
    /// Control pin could not be driven
    PinWriteFailed,
    /// No control pin has been selected
    NotPresent,
}

/// Flash identification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashError {
    /// Unique id read command failed (raw SDK error code)
    ReadIdFailed(i32),
    /// Flash chip does not implement the unique id command
    Unsupported,
}

/// Sleep configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepError {
    /// Power domain configuration rejected (raw SDK error code)
    DomainConfigFailed(i32),
}

impl From<UartError> for PlatformError {
    fn from(e: UartError) -> Self {
        PlatformError::Uart(e)
    }
}

impl From<PowerBusError> for PlatformError {
    fn from(e: PowerBusError) -> Self {
        PlatformError::PowerBus(e)
    }
}

impl From<FlashError> for PlatformError {
    fn from(e: FlashError) -> Self {
        PlatformError::Flash(e)
    }
}

impl From<SleepError> for PlatformError {
    fn from(e: SleepError) -> Self {
        PlatformError::Sleep(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::PowerBus(e) => write!(f, "Power bus error: {:?}", e),
            PlatformError::Flash(e) => write!(f, "Flash error: {:?}", e),
            PlatformError::Sleep(e) => write!(f, "Sleep error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}
