//! ESP32 UART quiescing

use super::ffi;
use crate::platform::{
    error::UartError,
    traits::{UartInterface, UartUnit},
    Result,
};

/// Waits for the UART transmitters to drain
#[derive(Debug)]
pub struct Esp32Uart {
    _private: (),
}

impl Esp32Uart {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl UartInterface for Esp32Uart {
    fn stop(&mut self, unit: UartUnit) -> Result<()> {
        let units = match unit {
            UartUnit::All => 0..ffi::UART_NUM_MAX,
            UartUnit::Unit(n) if n < ffi::UART_NUM_MAX => n..n + 1,
            UartUnit::Unit(_) => return Err(UartError::InvalidUnit.into()),
        };
        for n in units {
            // SAFETY: ROM routine, `n` is a valid unit number
            unsafe { ffi::uart_tx_wait_idle(n) };
        }
        Ok(())
    }
}
