//! ESP-IDF and ROM symbols used by the backend
//!
//! Resolved at link time against ESP-IDF v5 (64-bit `time_t`).

use core::ffi::c_void;

/// `esp_err_t` success value
pub const ESP_OK: i32 = 0;

/// `esp_sleep_pd_domain_t::ESP_PD_DOMAIN_RTC_SLOW_MEM`
pub const ESP_PD_DOMAIN_RTC_SLOW_MEM: u32 = 1;

/// `esp_sleep_pd_option_t::ESP_PD_OPTION_ON`
pub const ESP_PD_OPTION_ON: u32 = 1;

/// Efuse word holding the chip version field
pub const EFUSE_BLK0_RDATA3_REG: usize = 0x3FF5_A00C;

/// UART units on the ESP32
pub const UART_NUM_MAX: u8 = 3;

extern "C" {
    pub fn esp_restart() -> !;
    pub fn esp_deep_sleep(time_in_us: u64) -> !;
    pub fn esp_sleep_pd_config(domain: u32, option: u32) -> i32;
    pub fn rtc_get_reset_reason(cpu_no: i32) -> u32;
    pub fn uart_tx_wait_idle(uart_no: u8);
    pub fn gpio_set_level(gpio_num: i32, level: u32) -> i32;
    pub fn esp_flash_read_unique_chip_id(chip: *mut c_void, out_id: *mut u64) -> i32;
    pub fn time(tloc: *mut i64) -> i64;
}
