//! Mock Platform implementation for testing

use crate::platform::{
    traits::{Platform, StatusFlags},
    Result,
};

use super::{
    MockChip, MockClock, MockJournal, MockPower, MockPowerBus, MockRetained, MockUart,
};

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing. All
/// components share one `MockJournal`.
///
/// # Example
///
/// ```ignore
/// use esp32_cpu::platform::mock::MockPlatform;
/// use esp32_cpu::platform::traits::{ChipInterface, Platform};
///
/// let mut platform = MockPlatform::new();
/// platform.chip_mut().set_reset_cause(5);
/// assert_eq!(platform.chip().reset_cause(), 5);
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    journal: MockJournal,
    chip: MockChip,
    power: MockPower,
    uart: MockUart,
    power_bus: MockPowerBus,
    retained: MockRetained,
    clock: MockClock,
    status: StatusFlags,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        let journal = MockJournal::new();
        let retained = MockRetained::new(journal.clone());
        Self {
            chip: MockChip::new(),
            power: MockPower::new(journal.clone(), retained.shared()),
            uart: MockUart::new(journal.clone()),
            power_bus: MockPowerBus::new(journal.clone()),
            retained,
            clock: MockClock::new(),
            status: StatusFlags::empty(),
            journal,
        }
    }

    /// Journal shared by all mock components
    pub fn journal(&self) -> &MockJournal {
        &self.journal
    }

    /// Get mutable identification registers
    pub fn chip_mut(&mut self) -> &mut MockChip {
        &mut self.chip
    }

    /// Get mutable wall clock
    pub fn clock_mut(&mut self) -> &mut MockClock {
        &mut self.clock
    }

    /// Set the global status flags
    pub fn set_status(&mut self, status: StatusFlags) {
        self.status = status;
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Chip = MockChip;
    type Power = MockPower;
    type Uart = MockUart;
    type PowerBus = MockPowerBus;
    type Retained = MockRetained;
    type Clock = MockClock;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn chip(&self) -> &Self::Chip {
        &self.chip
    }

    fn power_mut(&mut self) -> &mut Self::Power {
        &mut self.power
    }

    fn uart_mut(&mut self) -> &mut Self::Uart {
        &mut self.uart
    }

    fn power_bus_mut(&mut self) -> &mut Self::PowerBus {
        &mut self.power_bus
    }

    fn retained(&self) -> &Self::Retained {
        &self.retained
    }

    fn retained_mut(&mut self) -> &mut Self::Retained {
        &mut self.retained
    }

    fn clock(&self) -> &Self::Clock {
        &self.clock
    }

    fn status(&self) -> StatusFlags {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{catch_halt, MockEvent, MockHalt};
    use crate::platform::traits::{
        ChipInterface, PowerInterface, RetainedData, RetainedStorage, SleepState, UartInterface,
        UartUnit,
    };

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.status(), StatusFlags::empty());
        assert_eq!(platform.chip().reset_cause(), 1);
        assert!(platform.journal().events().is_empty());
    }

    #[test]
    fn test_mock_platform_shared_journal() {
        let mut platform = MockPlatform::new();
        platform.uart_mut().stop(UartUnit::All).unwrap();
        platform.retained_mut().store(&RetainedData {
            sleep: SleepState::new(1, 1),
            boot_count: 0,
        });
        let halt = catch_halt(|| platform.power_mut().deep_sleep(1_000_000));

        assert_eq!(halt, MockHalt::DeepSleep { duration_us: 1_000_000 });
        let events = platform.journal().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], MockEvent::UartStop(UartUnit::All));
        assert!(matches!(events[1], MockEvent::RetainedStore(_)));
        assert!(matches!(
            events[2],
            MockEvent::DeepSleep { retained, .. } if retained.sleep.is_valid()
        ));
    }

    #[test]
    fn test_mock_platform_status() {
        let mut platform = MockPlatform::new();
        platform.set_status(StatusFlags::NEED_RTC_SLOW_MEM);
        assert!(platform.status().contains(StatusFlags::NEED_RTC_SLOW_MEM));
    }
}
