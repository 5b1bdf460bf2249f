//! Mock external power bus

use super::{MockEvent, MockJournal};
use crate::platform::{error::PowerBusError, traits::PowerBusInterface, Result};

/// Mock power bus, initially on and without a control pin
#[derive(Debug, Clone)]
pub struct MockPowerBus {
    journal: MockJournal,
    pin: Option<u8>,
    on: bool,
    fail: bool,
}

impl MockPowerBus {
    /// Create a powered mock bus sharing `journal`
    pub fn new(journal: MockJournal) -> Self {
        Self {
            journal,
            pin: None,
            on: true,
            fail: false,
        }
    }

    /// Control pin selected by the facade, if any
    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    /// Make `off` fail with `PowerBusError::PinWriteFailed`
    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }
}

impl PowerBusInterface for MockPowerBus {
    fn set_pin(&mut self, pin: u8) {
        self.pin = Some(pin);
    }

    fn off(&mut self) -> Result<()> {
        let pin = self.pin.ok_or(PowerBusError::NotPresent)?;
        if self.fail {
            return Err(PowerBusError::PinWriteFailed.into());
        }
        self.on = false;
        self.journal.record(MockEvent::PowerBusOff(pin));
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;

    #[test]
    fn test_mock_power_bus_off() {
        let journal = MockJournal::new();
        let mut bus = MockPowerBus::new(journal.clone());
        bus.set_pin(12);
        assert!(bus.is_on());

        bus.off().unwrap();
        assert!(!bus.is_on());
        assert_eq!(journal.events(), vec![MockEvent::PowerBusOff(12)]);
    }

    #[test]
    fn test_mock_power_bus_without_pin() {
        let journal = MockJournal::new();
        let mut bus = MockPowerBus::new(journal.clone());
        assert_eq!(
            bus.off(),
            Err(PlatformError::PowerBus(PowerBusError::NotPresent))
        );
        assert!(bus.is_on());
        assert!(journal.events().is_empty());
    }

    #[test]
    fn test_mock_power_bus_failure_keeps_power() {
        let mut bus = MockPowerBus::new(MockJournal::new());
        bus.set_pin(4);
        bus.set_fail(true);
        assert!(bus.off().is_err());
        assert!(bus.is_on());
    }
}
