//! Deep sleep, restart and retained state

use super::Cpu;
use crate::platform::traits::{
    ClockInterface, Platform, PowerBusInterface, PowerInterface, RetainedStorage, SleepState,
    StatusFlags, UartInterface, UartUnit,
};
use crate::{log_debug, log_info, log_warn};

impl<P: Platform> Cpu<P> {
    /// Put the chip into timed deep sleep
    ///
    /// Sequence:
    /// 1. cut the external power bus (when the board has one and it is on)
    /// 2. stop every UART so no partial output reaches the console
    /// 3. keep RTC slow memory powered if the system status asks for it
    /// 4. store the sleep record in retained memory
    /// 5. start the sleep timer for `seconds` and power down
    ///
    /// Quiescing failures are logged and do not stop the transition. The chip
    /// wakes through a reset, so this never returns.
    pub fn enter_deep_sleep(&mut self, seconds: u32) -> ! {
        log_info!("cpu deep sleep for {} s", seconds);

        if self.config.has_power_bus && self.platform.power_bus_mut().is_on() {
            if let Err(e) = self.platform.power_bus_mut().off() {
                log_warn!("cpu power bus off failed: {}", e);
            }
        }

        if let Err(e) = self.platform.uart_mut().stop(UartUnit::All) {
            log_warn!("cpu uart stop failed: {}", e);
        }

        if self
            .platform
            .status()
            .contains(StatusFlags::NEED_RTC_SLOW_MEM)
        {
            if let Err(e) = self.platform.power_mut().keep_rtc_slow_mem() {
                log_warn!("cpu rtc slow memory retention failed: {}", e);
            }
        }

        let mut retained = self.platform.retained().load();
        retained.sleep = SleepState::new(self.platform.clock().now_unix(), seconds);
        self.platform.retained_mut().store(&retained);

        let duration_us = self.config.sleep_duration_us(seconds);
        self.platform.power_mut().deep_sleep(duration_us)
    }

    /// Restart the chip
    pub fn reset(&mut self) -> ! {
        self.platform.power_mut().restart()
    }

    /// Sleep record left by the previous boot, if it is valid
    pub fn last_sleep(&self) -> Option<SleepState> {
        let sleep = self.platform.retained().load().sleep;
        sleep.is_valid().then_some(sleep)
    }

    /// Count this boot in retained memory and return the new count
    pub fn record_boot(&mut self) -> u32 {
        let mut retained = self.platform.retained().load();
        retained.boot_count = retained.boot_count.wrapping_add(1);
        self.platform.retained_mut().store(&retained);
        log_debug!("cpu boot count {}", retained.boot_count);
        retained.boot_count
    }
}

#[cfg(test)]
mod tests {
    use crate::core::log_buffer::LogLevel;
    use crate::core::log_router::{clear_buffer, get_buffered_logs};
    use crate::cpu::{Cpu, CpuConfig};
    use crate::platform::mock::{catch_halt, MockEvent, MockHalt, MockPlatform};
    use crate::platform::traits::{
        Platform, PowerBusInterface, RetainedData, SleepState, StatusFlags, UartUnit,
        SLEEP_CHECK_ID,
    };

    fn cpu_with(config: CpuConfig) -> Cpu<MockPlatform> {
        let mut platform = MockPlatform::new();
        platform.clock_mut().set_now(1_700_000_000);
        Cpu::new(platform, config)
    }

    fn cpu() -> Cpu<MockPlatform> {
        cpu_with(CpuConfig::default())
    }

    #[test]
    fn test_deep_sleep_writes_record_before_sleeping() {
        let mut cpu = cpu();

        let halt = catch_halt(|| cpu.enter_deep_sleep(30));
        assert_eq!(halt, MockHalt::DeepSleep { duration_us: 30_000_000 });

        let journal = cpu.platform().journal();
        let store = journal
            .position(|e| matches!(e, MockEvent::RetainedStore(_)))
            .unwrap();
        let sleep = journal
            .position(|e| matches!(e, MockEvent::DeepSleep { .. }))
            .unwrap();
        assert!(store < sleep);

        // State the platform saw at the moment it powered down
        match journal.events()[sleep] {
            MockEvent::DeepSleep { retained, .. } => {
                assert_eq!(retained.sleep.check, SLEEP_CHECK_ID);
                assert_eq!(retained.sleep.duration_secs, 30);
                assert_eq!(retained.sleep.start_time, 1_700_000_000);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_deep_sleep_invokes_primitive_once() {
        let mut cpu = cpu();
        catch_halt(|| cpu.enter_deep_sleep(1));
        let journal = cpu.platform().journal();
        assert_eq!(
            journal.count(|e| matches!(e, MockEvent::DeepSleep { .. })),
            1
        );
    }

    #[test]
    fn test_deep_sleep_sequence_without_power_bus() {
        let mut cpu = cpu();
        catch_halt(|| cpu.enter_deep_sleep(5));

        let events = cpu.platform().journal().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], MockEvent::UartStop(UartUnit::All));
        assert!(matches!(events[1], MockEvent::RetainedStore(_)));
        assert!(matches!(
            events[2],
            MockEvent::DeepSleep { duration_us: 5_000_000, .. }
        ));
    }

    #[test]
    fn test_deep_sleep_cuts_power_bus_first() {
        let mut cpu = cpu_with(CpuConfig {
            has_power_bus: true,
            ..CpuConfig::default()
        });
        catch_halt(|| cpu.enter_deep_sleep(5));

        let events = cpu.platform().journal().events();
        assert_eq!(events[0], MockEvent::PowerBusOff(0));
        assert_eq!(events[1], MockEvent::UartStop(UartUnit::All));
    }

    #[test]
    fn test_deep_sleep_drives_configured_pin() {
        let mut cpu = cpu_with(CpuConfig {
            has_power_bus: true,
            power_bus_pin: 12,
            ..CpuConfig::default()
        });
        catch_halt(|| cpu.enter_deep_sleep(5));

        let journal = cpu.platform().journal();
        assert_eq!(journal.count(|e| *e == MockEvent::PowerBusOff(12)), 1);
        assert_eq!(
            journal.count(|e| matches!(e, MockEvent::PowerBusOff(_))),
            1
        );
    }

    #[test]
    fn test_deep_sleep_skips_power_bus_already_off() {
        let mut cpu = cpu_with(CpuConfig {
            has_power_bus: true,
            power_bus_pin: 4,
            ..CpuConfig::default()
        });
        cpu.platform_mut().power_bus_mut().off().unwrap();
        catch_halt(|| cpu.enter_deep_sleep(5));

        let events = cpu.platform().journal().events();
        assert_eq!(events[0], MockEvent::PowerBusOff(4));
        assert_eq!(events[1], MockEvent::UartStop(UartUnit::All));
        assert_eq!(
            cpu.platform()
                .journal()
                .count(|e| matches!(e, MockEvent::PowerBusOff(_))),
            1
        );
    }

    #[test]
    fn test_deep_sleep_keeps_rtc_slow_mem_when_needed() {
        let mut cpu = cpu();
        cpu.platform_mut().set_status(StatusFlags::NEED_RTC_SLOW_MEM);
        catch_halt(|| cpu.enter_deep_sleep(5));

        let journal = cpu.platform().journal();
        let keep = journal.position(|e| *e == MockEvent::KeepRtcSlowMem).unwrap();
        let sleep = journal
            .position(|e| matches!(e, MockEvent::DeepSleep { .. }))
            .unwrap();
        assert!(keep < sleep);
    }

    #[test]
    fn test_deep_sleep_skips_rtc_slow_mem_by_default() {
        let mut cpu = cpu();
        catch_halt(|| cpu.enter_deep_sleep(5));
        assert_eq!(
            cpu.platform()
                .journal()
                .count(|e| *e == MockEvent::KeepRtcSlowMem),
            0
        );
    }

    #[test]
    fn test_deep_sleep_continues_after_quiesce_failures() {
        clear_buffer();
        let mut cpu = cpu_with(CpuConfig {
            has_power_bus: true,
            ..CpuConfig::default()
        });
        cpu.platform_mut().power_bus_mut().set_fail(true);
        cpu.platform_mut().uart_mut().set_fail_flush(true);
        cpu.platform_mut().set_status(StatusFlags::NEED_RTC_SLOW_MEM);
        cpu.platform_mut().power_mut().set_domain_error(Some(0x103));

        let halt = catch_halt(|| cpu.enter_deep_sleep(2));
        assert_eq!(halt, MockHalt::DeepSleep { duration_us: 2_000_000 });
        assert!(cpu.last_sleep().is_some());

        let warnings = get_buffered_logs()
            .iter()
            .filter(|m| m.level == LogLevel::Warn)
            .count();
        assert_eq!(warnings, 3);
    }

    #[test]
    fn test_deep_sleep_preserves_boot_count() {
        let mut cpu = cpu();
        cpu.record_boot();
        cpu.record_boot();
        catch_halt(|| cpu.enter_deep_sleep(10));

        let last = cpu
            .platform()
            .journal()
            .events()
            .into_iter()
            .last()
            .unwrap();
        assert!(matches!(
            last,
            MockEvent::DeepSleep { retained, .. } if retained.boot_count == 2
        ));
    }

    #[test]
    fn test_deep_sleep_calibration() {
        let mut cpu = cpu_with(CpuConfig {
            sleep_us_per_sec: 1_000_500,
            ..CpuConfig::default()
        });
        let halt = catch_halt(|| cpu.enter_deep_sleep(2));
        assert_eq!(halt, MockHalt::DeepSleep { duration_us: 2_001_000 });
    }

    #[test]
    fn test_reset() {
        let mut cpu = cpu();
        assert_eq!(catch_halt(|| cpu.reset()), MockHalt::Restart);
        assert_eq!(cpu.platform().journal().events(), vec![MockEvent::Restart]);
    }

    #[test]
    fn test_last_sleep_first_boot() {
        let cpu = cpu();
        assert_eq!(cpu.last_sleep(), None);
    }

    #[test]
    fn test_last_sleep_after_wake() {
        let mut platform = MockPlatform::new();
        platform.retained_mut().preload(RetainedData {
            sleep: SleepState::new(1_700_000_000, 60),
            boot_count: 4,
        });
        let cpu = Cpu::new(platform, CpuConfig::default());

        let sleep = cpu.last_sleep().unwrap();
        assert_eq!(sleep.duration_secs, 60);
        assert_eq!(sleep.wake_time(), 1_700_000_060);
    }

    #[test]
    fn test_last_sleep_rejects_bad_marker() {
        let mut platform = MockPlatform::new();
        platform.retained_mut().preload(RetainedData {
            sleep: SleepState {
                start_time: 1_700_000_000,
                duration_secs: 60,
                check: 0xBEEF,
            },
            boot_count: 0,
        });
        let cpu = Cpu::new(platform, CpuConfig::default());
        assert_eq!(cpu.last_sleep(), None);
    }

    #[test]
    fn test_record_boot() {
        let mut cpu = cpu();
        assert_eq!(cpu.record_boot(), 1);
        assert_eq!(cpu.record_boot(), 2);
        assert_eq!(cpu.last_sleep(), None);
    }

    #[test]
    fn test_record_boot_wraps() {
        let mut platform = MockPlatform::new();
        platform.retained_mut().preload(RetainedData {
            sleep: SleepState::empty(),
            boot_count: u32::MAX,
        });
        let mut cpu = Cpu::new(platform, CpuConfig::default());
        assert_eq!(cpu.record_boot(), 0);
    }
}
