//! ESP32 platform implementation
//!
//! Backend for the ESP32 running ESP-IDF. Identification comes from efuse and
//! ROM registers; power transitions, UART draining and the wall clock are
//! ESP-IDF calls; the retained record lives in RTC slow memory.
//!
//! Other subsystems publish their needs through [`status_set`]; the deep-sleep
//! path reads them back through `Platform::status`.

mod chip;
mod clock;
mod ffi;
mod platform;
mod power;
mod power_bus;
mod retained;
mod uart;

pub use chip::Esp32Chip;
pub use clock::Esp32Clock;
pub use platform::{status_get, status_set, Esp32Platform};
pub use power::Esp32Power;
pub use power_bus::Esp32PowerBus;
pub use retained::Esp32Retained;
pub use uart::Esp32Uart;
