//! Recording lot observer for testing.

use std::cell::RefCell;

use crate::parking::{LotId, LotObserver};

/// Observer that records every notification it receives.
///
/// # Example
///
/// ```rust,ignore
/// let observer = Rc::new(RecordingObserver::new());
/// lot.register(observer.clone());
///
/// // Park until full...
///
/// assert_eq!(observer.update_count(), 1);
/// assert_eq!(observer.last_update(), Some((lot.id(), false)));
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// Recorded `(lot, is_available)` pairs, oldest first.
    updates: RefCell<Vec<(LotId, bool)>>,
}

impl RecordingObserver {
    /// Create an observer with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded notifications.
    pub fn updates(&self) -> Vec<(LotId, bool)> {
        self.updates.borrow().clone()
    }

    /// Get the number of notifications received.
    pub fn update_count(&self) -> usize {
        self.updates.borrow().len()
    }

    /// Get the most recent notification.
    pub fn last_update(&self) -> Option<(LotId, bool)> {
        self.updates.borrow().last().copied()
    }

    /// Clear recorded notifications.
    pub fn clear(&self) {
        self.updates.borrow_mut().clear();
    }
}

impl LotObserver for RecordingObserver {
    fn update(&self, lot: LotId, is_available: bool) {
        self.updates.borrow_mut().push((lot, is_available));
    }
}
