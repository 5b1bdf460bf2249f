//! Core infrastructure
//!
//! Logging shared by the facade and the platform backends.

pub mod log_buffer;
pub mod log_router;
pub mod logging;
