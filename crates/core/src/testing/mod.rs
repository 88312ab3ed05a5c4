//! Testing utilities and mock implementations.
//!
//! This module provides a recording [`LotObserver`](crate::parking::LotObserver)
//! and fixture builders, so tests can assert on lot notifications without
//! going through an [`Attendant`](crate::parking::Attendant).
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use parkwise_core::parking::{Lot, Publisher};
//! use parkwise_core::testing::{fixtures, RecordingObserver};
//!
//! let observer = Rc::new(RecordingObserver::new());
//! let mut lot = Lot::new(1).unwrap();
//! lot.register(observer.clone());
//!
//! lot.park(&fixtures::car("B1234AAA")).unwrap();
//!
//! assert_eq!(observer.updates(), vec![(lot.id(), false)]);
//! ```

mod recording_observer;

pub use recording_observer::RecordingObserver;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::parking::{Attendant, Car, Lot, LotId};

    /// Create a car with a fresh identity.
    pub fn car(plate_number: &str) -> Car {
        Car::new(plate_number)
    }

    /// Create `count` distinct cars with sequential plate numbers.
    pub fn cars(count: usize) -> Vec<Car> {
        (1..=count).map(|i| Car::new(format!("B{:04}TST", i))).collect()
    }

    /// Create one lot per limit.
    ///
    /// Panics on a zero limit.
    pub fn lots(limits: &[usize]) -> Vec<Lot> {
        limits
            .iter()
            .map(|&limit| Lot::new(limit).expect("fixture lot limits must be positive"))
            .collect()
    }

    /// Create an attendant with one assigned lot per limit, returning the
    /// lot IDs in registration order.
    pub fn attendant_with_lots(limits: &[usize]) -> (Attendant, Vec<LotId>) {
        let mut attendant = Attendant::new();
        let ids = lots(limits)
            .into_iter()
            .map(|lot| attendant.assign_parking_lot(lot))
            .collect();
        (attendant, ids)
    }
}
