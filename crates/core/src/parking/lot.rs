//! Fixed-capacity parking lot.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::error::ParkingError;
use super::traits::{LotObserver, Publisher};
use super::types::{Car, CarId, LotId, Ticket, TicketId};
use crate::metrics;

/// A parking lot with a fixed number of slots.
///
/// Occupancy is the number of tickets currently issued and not yet redeemed.
/// Observers hear about the lot only when it crosses the full/not-full edge.
pub struct Lot {
    id: LotId,
    limit: usize,
    ticket_cars: HashMap<TicketId, Car>,
    parked_cars: HashSet<CarId>,
    observers: Vec<Rc<dyn LotObserver>>,
}

impl Lot {
    /// Create an empty lot with `limit` slots.
    ///
    /// Returns [`ParkingError::LimitInvalid`] for a zero limit.
    pub fn new(limit: usize) -> Result<Self, ParkingError> {
        if limit == 0 {
            return Err(ParkingError::LimitInvalid);
        }

        Ok(Self {
            id: LotId::new(),
            limit,
            ticket_cars: HashMap::new(),
            parked_cars: HashSet::new(),
            observers: Vec::new(),
        })
    }

    pub fn id(&self) -> LotId {
        self.id
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of occupied slots.
    pub fn occupancy(&self) -> usize {
        self.ticket_cars.len()
    }

    /// Number of free slots.
    pub fn calculate_vacancy(&self) -> usize {
        self.limit - self.ticket_cars.len()
    }

    /// Issued tickets and the cars they refer to.
    pub fn ticket_cars(&self) -> &HashMap<TicketId, Car> {
        &self.ticket_cars
    }

    pub fn is_full(&self) -> bool {
        self.ticket_cars.len() == self.limit
    }

    pub fn is_ticket_found(&self, ticket: &Ticket) -> bool {
        self.ticket_cars.contains_key(&ticket.id())
    }

    pub fn is_car_found(&self, car: &Car) -> bool {
        self.parked_cars.contains(&car.id())
    }

    /// Park `car` and hand out a fresh ticket for it.
    ///
    /// Notifies observers with `false` when this park fills the last slot.
    pub fn park(&mut self, car: &Car) -> Result<Ticket, ParkingError> {
        if self.is_full() {
            metrics::PARK_REJECTIONS
                .with_label_values(&[ParkingError::NoPosition.reason()])
                .inc();
            return Err(ParkingError::NoPosition);
        }
        if self.is_car_found(car) {
            metrics::PARK_REJECTIONS
                .with_label_values(&[ParkingError::CannotParkTwice.reason()])
                .inc();
            return Err(ParkingError::CannotParkTwice);
        }

        let ticket = Ticket::new();
        self.ticket_cars.insert(ticket.id(), car.clone());
        self.parked_cars.insert(car.id());
        metrics::CARS_PARKED.inc();

        debug!(
            lot_id = %self.id,
            ticket_id = %ticket.id(),
            plate_number = car.plate_number(),
            vacancy = self.calculate_vacancy(),
            "Car parked"
        );

        if self.is_full() {
            self.notify_all(false);
        }

        Ok(ticket)
    }

    /// Release the car held under `ticket`.
    ///
    /// Notifies observers with `true` when this frees a slot in a full lot.
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Car, ParkingError> {
        let was_full = self.is_full();
        let Some(car) = self.ticket_cars.remove(&ticket.id()) else {
            metrics::UNPARK_REJECTIONS
                .with_label_values(&[ParkingError::UnrecognizedTicket.reason()])
                .inc();
            return Err(ParkingError::UnrecognizedTicket);
        };
        self.parked_cars.remove(&car.id());
        metrics::CARS_UNPARKED.inc();

        debug!(
            lot_id = %self.id,
            ticket_id = %ticket.id(),
            plate_number = car.plate_number(),
            vacancy = self.calculate_vacancy(),
            "Car unparked"
        );

        if was_full && !self.is_full() {
            self.notify_all(true);
        }

        Ok(car)
    }
}

impl Publisher for Lot {
    fn register(&mut self, observer: Rc<dyn LotObserver>) {
        self.observers.push(observer);
    }

    fn notify_all(&self, is_available: bool) {
        let direction = if is_available { "available" } else { "full" };
        metrics::LOT_TRANSITIONS
            .with_label_values(&[direction])
            .inc();
        debug!(
            lot_id = %self.id,
            direction,
            observers = self.observers.len(),
            "Notifying lot observers"
        );

        for observer in &self.observers {
            observer.update(self.id, is_available);
        }
    }
}

impl fmt::Debug for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lot")
            .field("id", &self.id)
            .field("limit", &self.limit)
            .field("occupancy", &self.occupancy())
            .field("observers", &self.observers.len())
            .finish()
    }
}
