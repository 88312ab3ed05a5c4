//! Trait definitions for the parking module.

use std::rc::Rc;

use super::types::LotId;

/// Receives availability changes from the lots it is registered with.
///
/// Takes `&self`: a lot notifies while its owner may be in the middle of a
/// mutable operation, so implementations keep their state behind interior
/// mutability.
pub trait LotObserver {
    /// Called when `lot` becomes full (`false`) or frees a slot after being
    /// full (`true`).
    fn update(&self, lot: LotId, is_available: bool);
}

/// Something that broadcasts availability changes to registered observers.
pub trait Publisher {
    /// Append an observer. Registering the same observer twice delivers every
    /// notification twice.
    fn register(&mut self, observer: Rc<dyn LotObserver>);

    /// Notify every observer, in registration order.
    fn notify_all(&self, is_available: bool);
}
