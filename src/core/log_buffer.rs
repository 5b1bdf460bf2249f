//! Recent log lines
//!
//! Boot identity and sleep-entry warnings are written before a console is
//! usually attached. The last [`LOG_BUFFER_SIZE`] lines are kept here, in a
//! `heapless::HistoryBuf`, and handed out oldest first by [`RingBufferSink::drain`].

use heapless::{HistoryBuf, String, Vec};

/// Lines kept before the oldest is dropped
pub const LOG_BUFFER_SIZE: usize = 16;

/// Longest line in bytes; the rest is cut off
pub const LOG_MSG_SIZE: usize = 256;

/// Log level with ordering: Trace < Debug < Info < Warn < Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Fixed-width tag used on text consoles
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Error => "[ERROR]",
        }
    }
}

/// Log message containing level and text
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String<LOG_MSG_SIZE>,
}

impl LogMessage {
    /// Create a new log message
    pub fn new(level: LogLevel, message: String<LOG_MSG_SIZE>) -> Self {
        Self { level, message }
    }
}

/// Fixed-size store of the most recent log lines
///
/// A full buffer drops its oldest line and counts the loss.
pub struct RingBufferSink {
    buffer: HistoryBuf<LogMessage, LOG_BUFFER_SIZE>,
    overflow_count: u32,
}

impl RingBufferSink {
    /// Create a new empty ring buffer sink
    pub const fn new() -> Self {
        Self {
            buffer: HistoryBuf::new(),
            overflow_count: 0,
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&mut self, msg: LogMessage) {
        if self.buffer.len() == LOG_BUFFER_SIZE {
            self.overflow_count = self.overflow_count.saturating_add(1);
        }
        self.buffer.write(msg);
    }

    /// Lines currently held
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Lines evicted before anyone drained them
    pub fn overflow_count(&self) -> u32 {
        self.overflow_count
    }

    /// Take every held line, oldest first
    pub fn drain(&mut self) -> Vec<LogMessage, LOG_BUFFER_SIZE> {
        let mut result = Vec::new();
        for msg in self.buffer.oldest_ordered() {
            let _ = result.push(msg.clone());
        }
        self.buffer.clear();
        result
    }

    /// Drop every held line; the overflow count is kept
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for RingBufferSink {
    fn default() -> Self {
        Self::new()
    }
}
