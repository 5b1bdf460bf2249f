//! Log Router
//!
//! Keeps the most recent log lines in a ring buffer so a console can show
//! what happened before it attached (boot identity, sleep entry warnings).
//!
//! ## Usage
//!
//! The log router is automatically called by the log macros.
//! Use the retrieval API to access buffered logs:
//!
//! ```ignore
//! use esp32_cpu::core::log_router::{get_buffered_logs, buffer_len, overflow_count};
//!
//! // Get all buffered logs (drains buffer)
//! let logs = get_buffered_logs();
//!
//! // Check buffer status
//! let count = buffer_len();
//! let overflows = overflow_count();
//! ```

use crate::core::log_buffer::{LogMessage, RingBufferSink};

/// Log router that dispatches messages to its sinks
pub struct LogRouter {
    buffer_sink: RingBufferSink,
}

impl LogRouter {
    /// Create a new log router
    pub const fn new() -> Self {
        Self {
            buffer_sink: RingBufferSink::new(),
        }
    }

    /// Route a log message to the ring buffer
    pub fn route(&mut self, msg: LogMessage) {
        self.buffer_sink.push(msg);
    }

    /// Get a reference to the buffer sink
    pub fn buffer_sink(&self) -> &RingBufferSink {
        &self.buffer_sink
    }

    /// Get a mutable reference to the buffer sink
    pub fn buffer_sink_mut(&mut self) -> &mut RingBufferSink {
        &mut self.buffer_sink
    }
}

impl Default for LogRouter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Embedded Implementation (ESP32)
// =============================================================================

#[cfg(feature = "esp32")]
mod target_impl {
    use super::{LogMessage, LogRouter};
    use crate::core::log_buffer::LOG_BUFFER_SIZE;
    use core::cell::RefCell;
    use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
    use heapless::Vec;

    /// Global log router (critical-section protected)
    static LOG_ROUTER: Mutex<CriticalSectionRawMutex, RefCell<LogRouter>> =
        Mutex::new(RefCell::new(LogRouter::new()));

    /// Route a log message through the global router
    pub fn route_log(msg: LogMessage) {
        LOG_ROUTER.lock(|router| router.borrow_mut().route(msg));
    }

    /// Get all buffered logs (drains the buffer)
    pub fn get_buffered_logs() -> Vec<LogMessage, LOG_BUFFER_SIZE> {
        LOG_ROUTER.lock(|router| router.borrow_mut().buffer_sink_mut().drain())
    }

    /// Get the current number of buffered messages
    pub fn buffer_len() -> usize {
        LOG_ROUTER.lock(|router| router.borrow().buffer_sink().len())
    }

    /// Get the number of messages lost due to buffer overflow
    pub fn overflow_count() -> u32 {
        LOG_ROUTER.lock(|router| router.borrow().buffer_sink().overflow_count())
    }

    /// Clear all buffered messages
    pub fn clear_buffer() {
        LOG_ROUTER.lock(|router| router.borrow_mut().buffer_sink_mut().clear());
    }
}

#[cfg(feature = "esp32")]
pub use target_impl::{buffer_len, clear_buffer, get_buffered_logs, overflow_count, route_log};

// =============================================================================
// Host Implementation (tests and mock builds)
// =============================================================================

#[cfg(all(not(feature = "esp32"), any(test, feature = "mock")))]
mod host_impl {
    use super::{LogMessage, LogRouter};
    use crate::core::log_buffer::LOG_BUFFER_SIZE;
    use heapless::Vec;
    use std::cell::RefCell;

    thread_local! {
        static HOST_ROUTER: RefCell<LogRouter> = const { RefCell::new(LogRouter::new()) };
    }

    pub fn route_log(msg: LogMessage) {
        HOST_ROUTER.with(|router| router.borrow_mut().route(msg));
    }

    pub fn get_buffered_logs() -> Vec<LogMessage, LOG_BUFFER_SIZE> {
        HOST_ROUTER.with(|router| router.borrow_mut().buffer_sink_mut().drain())
    }

    pub fn buffer_len() -> usize {
        HOST_ROUTER.with(|router| router.borrow().buffer_sink().len())
    }

    pub fn overflow_count() -> u32 {
        HOST_ROUTER.with(|router| router.borrow().buffer_sink().overflow_count())
    }

    pub fn clear_buffer() {
        HOST_ROUTER.with(|router| router.borrow_mut().buffer_sink_mut().clear());
    }
}

#[cfg(all(not(feature = "esp32"), any(test, feature = "mock")))]
pub use host_impl::{buffer_len, clear_buffer, get_buffered_logs, overflow_count, route_log};

/// Host builds without std have nowhere to keep messages
#[cfg(all(not(feature = "esp32"), not(any(test, feature = "mock"))))]
pub fn route_log(_msg: LogMessage) {}
