//! Global system status flags

bitflags::bitflags! {
    /// System-wide status bits published by other subsystems
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StatusFlags: u32 {
        /// Some subsystem keeps data in RTC slow memory and needs it powered in deep sleep
        const NEED_RTC_SLOW_MEM = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let flags = StatusFlags::default();
        assert!(!flags.contains(StatusFlags::NEED_RTC_SLOW_MEM));
    }

    #[test]
    fn test_need_rtc_slow_mem() {
        let flags = StatusFlags::NEED_RTC_SLOW_MEM;
        assert!(flags.contains(StatusFlags::NEED_RTC_SLOW_MEM));
        assert_eq!(flags.bits(), 1);
    }
}
