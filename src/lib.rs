#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! esp32_cpu - Identity and power facade for ESP32
//!
//! This library reports chip identity (model, clock speed, silicon revision,
//! reset cause, flash id) and performs the terminal power transitions
//! (restart, timed deep sleep) after quiescing the peripherals that would
//! otherwise misbehave while the chip powers down.

// Platform abstraction layer: all register access and SDK calls live here
pub mod platform;

// Logging infrastructure
pub mod core;

// Identity and power facade
pub mod cpu;
