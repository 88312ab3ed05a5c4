//! Attendant managing a set of lots.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::error::ParkingError;
use super::lot::Lot;
use super::style::ParkingStyle;
use super::traits::{LotObserver, Publisher};
use super::types::{Car, LotId, Ticket};
use crate::metrics;

/// Lots with at least one free slot, most recently freed first.
///
/// Shared with every assigned lot as its observer, so it lives behind an
/// `Rc` and keeps its list in a `RefCell`.
#[derive(Debug, Default)]
struct AvailableLots {
    lots: RefCell<Vec<LotId>>,
}

impl AvailableLots {
    fn push_back(&self, lot: LotId) {
        let mut lots = self.lots.borrow_mut();
        lots.push(lot);
        metrics::AVAILABLE_LOTS.set(lots.len() as i64);
    }

    fn snapshot(&self) -> Vec<LotId> {
        self.lots.borrow().clone()
    }
}

impl LotObserver for AvailableLots {
    fn update(&self, lot: LotId, is_available: bool) {
        let mut lots = self.lots.borrow_mut();
        if let Some(position) = lots.iter().position(|id| *id == lot) {
            lots.remove(position);
        }
        if is_available {
            lots.insert(0, lot);
        }
        metrics::AVAILABLE_LOTS.set(lots.len() as i64);

        debug!(
            lot_id = %lot,
            is_available,
            available_lots = lots.len(),
            "Available lots updated"
        );
    }
}

/// Parks cars across the lots assigned to it.
///
/// Lots are owned by the attendant once assigned and addressed by [`LotId`].
/// The attendant keeps its own view of which lots still have room, fed by
/// the lots' full/available notifications, and asks the active
/// [`ParkingStyle`] to choose among them.
#[derive(Debug, Default)]
pub struct Attendant {
    assigned_lots: Vec<Lot>,
    available_lots: Rc<AvailableLots>,
    style: ParkingStyle,
}

impl Attendant {
    /// Create an attendant with no lots, using [`ParkingStyle::Default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `style` instead of the default.
    pub fn with_style(mut self, style: ParkingStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the active style. Applies from the next [`park`](Self::park).
    pub fn set_parking_style(&mut self, style: ParkingStyle) {
        info!(from = %self.style, to = %style, "Parking style changed");
        self.style = style;
    }

    pub fn parking_style(&self) -> ParkingStyle {
        self.style
    }

    /// Take ownership of `lot` and start tracking its availability.
    pub fn assign_parking_lot(&mut self, mut lot: Lot) -> LotId {
        let id = lot.id();
        if !lot.is_full() {
            self.available_lots.push_back(id);
        }
        lot.register(Rc::clone(&self.available_lots) as Rc<dyn LotObserver>);
        metrics::LOTS_REGISTERED.inc();

        info!(
            lot_id = %id,
            limit = lot.limit(),
            assigned_lots = self.assigned_lots.len() + 1,
            "Parking lot assigned"
        );

        self.assigned_lots.push(lot);
        id
    }

    /// Lots that currently have room, in availability order.
    pub fn available_parking_lot(&self) -> Vec<&Lot> {
        self.available_lots
            .snapshot()
            .into_iter()
            .filter_map(|id| self.lot(id))
            .collect()
    }

    /// All assigned lots, in registration order.
    pub fn lots(&self) -> &[Lot] {
        &self.assigned_lots
    }

    pub fn lot(&self, id: LotId) -> Option<&Lot> {
        self.assigned_lots.iter().find(|lot| lot.id() == id)
    }

    /// Park `car` in the lot chosen by the active style.
    ///
    /// Refuses cars already parked in any assigned lot.
    pub fn park(&mut self, car: &Car) -> Result<Ticket, ParkingError> {
        if self.assigned_lots.iter().any(|lot| lot.is_car_found(car)) {
            return Err(self.reject_park(car, ParkingError::CannotParkTwice));
        }

        let candidates = self.available_parking_lot();
        if candidates.is_empty() {
            return Err(self.reject_park(car, ParkingError::NoPosition));
        }
        let chosen = self.style.choose_lot(&candidates).id();

        debug!(
            lot_id = %chosen,
            style = %self.style,
            candidates = candidates.len(),
            plate_number = car.plate_number(),
            "Lot chosen"
        );

        let lot = self
            .assigned_lots
            .iter_mut()
            .find(|lot| lot.id() == chosen)
            .ok_or(ParkingError::NoPosition)?;
        lot.park(car)
    }

    /// Unpark the car held under `ticket`, wherever it is parked.
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Car, ParkingError> {
        match self
            .assigned_lots
            .iter_mut()
            .find(|lot| lot.is_ticket_found(ticket))
        {
            Some(lot) => lot.unpark(ticket),
            None => {
                metrics::UNPARK_REJECTIONS
                    .with_label_values(&[ParkingError::UnrecognizedTicket.reason()])
                    .inc();
                debug!(ticket_id = %ticket.id(), "Unpark rejected: ticket not held by any lot");
                Err(ParkingError::UnrecognizedTicket)
            }
        }
    }

    fn reject_park(&self, car: &Car, error: ParkingError) -> ParkingError {
        metrics::PARK_REJECTIONS
            .with_label_values(&[error.reason()])
            .inc();
        debug!(
            plate_number = car.plate_number(),
            reason = error.reason(),
            "Park rejected"
        );
        error
    }
}

impl LotObserver for Attendant {
    fn update(&self, lot: LotId, is_available: bool) {
        self.available_lots.update(lot, is_available);
    }
}
