//! Mock retained memory

use super::{MockEvent, MockJournal};
use crate::platform::traits::{RetainedData, RetainedStorage};
use core::cell::RefCell;
use std::rc::Rc;

/// Mock retained memory region
///
/// The region is shared with `MockPower` so a deep-sleep call can snapshot
/// exactly what had been stored when the chip went down.
#[derive(Debug, Clone)]
pub struct MockRetained {
    journal: MockJournal,
    data: Rc<RefCell<RetainedData>>,
}

impl MockRetained {
    /// Create a cold-boot (empty) retained region sharing `journal`
    pub fn new(journal: MockJournal) -> Self {
        Self {
            journal,
            data: Rc::new(RefCell::new(RetainedData::empty())),
        }
    }

    /// Handle to the underlying region
    pub(crate) fn shared(&self) -> Rc<RefCell<RetainedData>> {
        Rc::clone(&self.data)
    }

    /// Preload the region, as if left there by a previous boot
    ///
    /// Not recorded in the journal.
    pub fn preload(&mut self, data: RetainedData) {
        *self.data.borrow_mut() = data;
    }
}

impl RetainedStorage for MockRetained {
    fn load(&self) -> RetainedData {
        *self.data.borrow()
    }

    fn store(&mut self, data: &RetainedData) {
        *self.data.borrow_mut() = *data;
        self.journal.record(MockEvent::RetainedStore(*data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::SleepState;

    #[test]
    fn test_mock_retained_cold_boot() {
        let retained = MockRetained::new(MockJournal::new());
        assert_eq!(retained.load(), RetainedData::empty());
    }

    #[test]
    fn test_mock_retained_store_and_load() {
        let journal = MockJournal::new();
        let mut retained = MockRetained::new(journal.clone());
        let data = RetainedData {
            sleep: SleepState::new(100, 5),
            boot_count: 3,
        };

        retained.store(&data);
        assert_eq!(retained.load(), data);
        assert_eq!(journal.events(), vec![MockEvent::RetainedStore(data)]);
    }

    #[test]
    fn test_mock_retained_preload_not_journaled() {
        let journal = MockJournal::new();
        let mut retained = MockRetained::new(journal.clone());
        retained.preload(RetainedData {
            sleep: SleepState::empty(),
            boot_count: 7,
        });
        assert_eq!(retained.load().boot_count, 7);
        assert!(journal.events().is_empty());
    }
}
