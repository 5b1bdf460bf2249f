//! Reset cause decoding
//!
//! The reset-cause register holds a small code written by the hardware on every
//! reset. Codes not in the table below decode to [`ResetReason::Unknown`],
//! which keeps the raw value.

use core::fmt;

/// Capacity of a reset description buffer
///
/// Fits the longest description in the table.
pub const REASON_LEN: usize = 64;

/// Why the chip last came out of reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// 1: Vbat power on
    PowerOn,
    /// 3: software reset of the digital core
    SoftwareCore,
    /// 4: legacy watchdog reset of the digital core
    LegacyWatchdogCore,
    /// 5: wake from deep sleep
    DeepSleep,
    /// 6: SLC module reset of the digital core
    SlcCore,
    /// 7: timer group 0 watchdog reset of the digital core
    TimerGroup0WatchdogCore,
    /// 8: timer group 1 watchdog reset of the digital core
    TimerGroup1WatchdogCore,
    /// 9: RTC watchdog reset of the digital core
    RtcWatchdogCore,
    /// 10: intrusion detected, CPU reset
    Intrusion,
    /// 11: timer group reset of the CPU
    TimerGroupCpu,
    /// 12: software reset of the CPU
    SoftwareCpu,
    /// 13: RTC watchdog reset of the CPU
    RtcWatchdogCpu,
    /// 14: APP CPU reset by the PRO CPU
    AppCpuByProCpu,
    /// 15: brown-out, VDD not stable
    BrownOut,
    /// 16: RTC watchdog reset of the digital core and RTC module
    RtcWatchdogRtc,
    /// Any other code
    Unknown(u32),
}

impl ResetReason {
    /// Decode a raw reset-cause code
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => ResetReason::PowerOn,
            3 => ResetReason::SoftwareCore,
            4 => ResetReason::LegacyWatchdogCore,
            5 => ResetReason::DeepSleep,
            6 => ResetReason::SlcCore,
            7 => ResetReason::TimerGroup0WatchdogCore,
            8 => ResetReason::TimerGroup1WatchdogCore,
            9 => ResetReason::RtcWatchdogCore,
            10 => ResetReason::Intrusion,
            11 => ResetReason::TimerGroupCpu,
            12 => ResetReason::SoftwareCpu,
            13 => ResetReason::RtcWatchdogCpu,
            14 => ResetReason::AppCpuByProCpu,
            15 => ResetReason::BrownOut,
            16 => ResetReason::RtcWatchdogRtc,
            other => ResetReason::Unknown(other),
        }
    }

    /// Raw code this reason was decoded from
    pub fn code(self) -> u32 {
        match self {
            ResetReason::PowerOn => 1,
            ResetReason::SoftwareCore => 3,
            ResetReason::LegacyWatchdogCore => 4,
            ResetReason::DeepSleep => 5,
            ResetReason::SlcCore => 6,
            ResetReason::TimerGroup0WatchdogCore => 7,
            ResetReason::TimerGroup1WatchdogCore => 8,
            ResetReason::RtcWatchdogCore => 9,
            ResetReason::Intrusion => 10,
            ResetReason::TimerGroupCpu => 11,
            ResetReason::SoftwareCpu => 12,
            ResetReason::RtcWatchdogCpu => 13,
            ResetReason::AppCpuByProCpu => 14,
            ResetReason::BrownOut => 15,
            ResetReason::RtcWatchdogRtc => 16,
            ResetReason::Unknown(code) => code,
        }
    }

    /// Console text for this reason
    ///
    /// The wording matches what the console has always printed, spelling included.
    pub fn description(self) -> &'static str {
        match self {
            ResetReason::PowerOn => "Vbat power on reset",
            ResetReason::SoftwareCore => "Software reset digital core",
            ResetReason::LegacyWatchdogCore => "Legacy watch dog reset digital core",
            ResetReason::DeepSleep => "Deep Sleep reset digital core",
            ResetReason::SlcCore => "Reset by SLC module, reset digital core",
            ResetReason::TimerGroup0WatchdogCore => "Timer Group0 Watch dog reset digital core",
            ResetReason::TimerGroup1WatchdogCore => "Timer Group1 Watch dog reset digital core",
            ResetReason::RtcWatchdogCore => "RTC Watch dog Reset digital core",
            ResetReason::Intrusion => "Instrusion tested to reset CPU",
            ResetReason::TimerGroupCpu => "Time Group reset CPU",
            ResetReason::SoftwareCpu => "Software reset CPU",
            ResetReason::RtcWatchdogCpu => "RTC Watch dog Reset CPU",
            ResetReason::AppCpuByProCpu => "for APP CPU, reseted by PRO CPU",
            ResetReason::BrownOut => "Reset when the vdd voltage is not stable",
            ResetReason::RtcWatchdogRtc => "RTC Watch dog reset digital core and rtc module",
            ResetReason::Unknown(_) => "Unknown",
        }
    }

    /// Whether the chip is waking from deep sleep
    pub fn is_deep_sleep_wake(self) -> bool {
        self == ResetReason::DeepSleep
    }
}

impl From<u32> for ResetReason {
    fn from(code: u32) -> Self {
        ResetReason::from_code(code)
    }
}

impl fmt::Display for ResetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
