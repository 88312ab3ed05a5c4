//! Parking domain: lots, the attendant and lot selection styles.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Attendant                          │
//! │                                                           │
//! │  assigned lots (registration order)                       │
//! │  available lots (most recently freed first) ◄──────┐      │
//! │  ParkingStyle: default | max | vacant              │      │
//! └──────────┬─────────────────────────────────────────┼──────┘
//!            │ park / unpark                           │ update(lot, is_available)
//!            ▼                                         │
//! ┌─────────────────────┐   ┌─────────────────────┐    │
//! │        Lot          │   │        Lot          │────┘
//! │ tickets → cars      │   │ tickets → cars      │
//! └─────────────────────┘   └─────────────────────┘
//! ```
//!
//! A lot only notifies its observers on the full/not-full edge, so the
//! attendant's available list changes when a lot fills its last slot or
//! frees a slot after being full, never on intermediate parks.
//!
//! # Example
//!
//! ```
//! use parkwise_core::parking::{Attendant, Car, Lot, ParkingStyle};
//!
//! let mut attendant = Attendant::new().with_style(ParkingStyle::Max);
//! attendant.assign_parking_lot(Lot::new(2)?);
//! let large = attendant.assign_parking_lot(Lot::new(5)?);
//!
//! let car = Car::new("B1234AAA");
//! let ticket = attendant.park(&car)?;
//! assert!(attendant.lot(large).unwrap().is_ticket_found(&ticket));
//!
//! assert_eq!(attendant.unpark(&ticket)?, car);
//! # Ok::<(), parkwise_core::parking::ParkingError>(())
//! ```

mod attendant;
mod error;
mod lot;
mod style;
mod traits;
mod types;

pub use attendant::Attendant;
pub use error::ParkingError;
pub use lot::Lot;
pub use style::ParkingStyle;
pub use traits::{LotObserver, Publisher};
pub use types::{Car, CarId, LotId, Ticket, TicketId};
