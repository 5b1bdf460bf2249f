//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (esp32): Uses defmt
//! - Host tests: Uses println!/eprintln!
//! - Host non-test: No console output
//!
//! Every line is also handed to the log router, which keeps the most recent
//! lines in a ring buffer (see [`crate::core::log_router`]).
//!
//! Messages are formatted with `core::fmt` into a fixed-size string and
//! truncated at [`LOG_MSG_SIZE`] bytes.

use core::fmt;
use heapless::String;

use crate::core::log_buffer::{LogLevel, LogMessage, LOG_MSG_SIZE};
use crate::core::log_router::route_log;

/// Format and dispatch one log line
///
/// Called by the `log_*!` macros; use those instead.
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
    let mut message: String<LOG_MSG_SIZE> = String::new();
    // Overlong messages keep what fit
    let _ = fmt::write(&mut message, args);

    emit(level, message.as_str());
    route_log(LogMessage::new(level, message));
}

#[cfg(feature = "esp32")]
fn emit(level: LogLevel, text: &str) {
    match level {
        LogLevel::Trace => defmt::trace!("{=str}", text),
        LogLevel::Debug => defmt::debug!("{=str}", text),
        LogLevel::Info => defmt::info!("{=str}", text),
        LogLevel::Warn => defmt::warn!("{=str}", text),
        LogLevel::Error => defmt::error!("{=str}", text),
    }
}

#[cfg(all(not(feature = "esp32"), test))]
fn emit(level: LogLevel, text: &str) {
    match level {
        LogLevel::Error => eprintln!("{} {}", level.tag(), text),
        _ => println!("{} {}", level.tag(), text),
    }
}

#[cfg(all(not(feature = "esp32"), not(test)))]
fn emit(_level: LogLevel, _text: &str) {}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::core::logging::log(
            $crate::core::log_buffer::LogLevel::Info,
            ::core::format_args!($($arg)*),
        )
    };
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::core::logging::log(
            $crate::core::log_buffer::LogLevel::Warn,
            ::core::format_args!($($arg)*),
        )
    };
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::core::logging::log(
            $crate::core::log_buffer::LogLevel::Error,
            ::core::format_args!($($arg)*),
        )
    };
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::core::logging::log(
            $crate::core::log_buffer::LogLevel::Debug,
            ::core::format_args!($($arg)*),
        )
    };
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::core::logging::log(
            $crate::core::log_buffer::LogLevel::Trace,
            ::core::format_args!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_router::{clear_buffer, get_buffered_logs};

    #[test]
    fn test_macros_route_to_buffer() {
        clear_buffer();
        crate::log_info!("cpu {} at {} Mhz", "ESP32 rev 1", 240);
        crate::log_error!("cpu unknown CPU");

        let logs = get_buffered_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].level, LogLevel::Info);
        assert_eq!(logs[0].message.as_str(), "cpu ESP32 rev 1 at 240 Mhz");
        assert_eq!(logs[1].level, LogLevel::Error);
    }

    #[test]
    fn test_long_message_truncated() {
        clear_buffer();
        let long = "x".repeat(LOG_MSG_SIZE + 10);
        crate::log_debug!("{}", long.as_str());

        let logs = get_buffered_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].message.len() <= LOG_MSG_SIZE);
    }
}
