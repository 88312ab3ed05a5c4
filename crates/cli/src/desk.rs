use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};

use parkwise_core::{Attendant, Car, Lot, ParkingConfig, ParkingError, ParkingStyle, Ticket};

/// Limit and vacancy of a lot, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotSummary {
    pub limit: usize,
    pub vacancy: usize,
}

impl From<&Lot> for LotSummary {
    fn from(lot: &Lot) -> Self {
        Self {
            limit: lot.limit(),
            vacancy: lot.calculate_vacancy(),
        }
    }
}

/// Front desk between the console and the attendant.
///
/// Users only ever see ticket IDs and plate numbers, so the desk keeps the
/// issued tickets by ID. Every park brings a new car, even when its plate
/// number matches one already parked.
pub struct ParkingDesk {
    attendant: Attendant,
    tickets: HashMap<String, Ticket>,
}

impl ParkingDesk {
    pub fn new(attendant: Attendant) -> Self {
        Self {
            attendant,
            tickets: HashMap::new(),
        }
    }

    /// Build a desk with the configured style and pre-registered lots.
    pub fn from_config(config: &ParkingConfig) -> Result<Self, ParkingError> {
        let mut desk = Self::new(Attendant::new().with_style(config.style));
        for &limit in &config.lots {
            desk.assign_parking_lot(limit)?;
        }
        info!(
            lots = config.lots.len(),
            style = %config.style,
            "Parking desk ready"
        );
        Ok(desk)
    }

    /// Lots with room, in the attendant's availability order.
    pub fn available_parking_lot(&self) -> Vec<LotSummary> {
        self.attendant
            .available_parking_lot()
            .into_iter()
            .map(LotSummary::from)
            .collect()
    }

    pub fn assign_parking_lot(&mut self, limit: usize) -> Result<LotSummary, ParkingError> {
        let lot = Lot::new(limit)?;
        let summary = LotSummary::from(&lot);
        self.attendant.assign_parking_lot(lot);
        Ok(summary)
    }

    /// Park the car with `plate_number`, returning the ticket ID.
    pub fn park(&mut self, plate_number: &str) -> Result<String, ParkingError> {
        let car = Car::new(plate_number);
        let ticket = self.attendant.park(&car)?;
        let ticket_id = ticket.id().to_string();
        debug!(
            ticket_id = %ticket_id,
            plate_number,
            issued_at = %ticket.issued_at(),
            "Ticket issued"
        );

        self.tickets.insert(ticket_id.clone(), ticket);
        Ok(ticket_id)
    }

    /// Unpark the car parked under `ticket_id`, returning its plate number.
    pub fn unpark(&mut self, ticket_id: &str) -> Result<String, ParkingError> {
        let ticket = self
            .tickets
            .get(ticket_id)
            .ok_or(ParkingError::UnrecognizedTicket)?;
        let car = self.attendant.unpark(ticket)?;

        let parked_secs = (Utc::now() - ticket.issued_at()).num_seconds();
        self.tickets.remove(ticket_id);
        debug!(
            ticket_id,
            plate_number = car.plate_number(),
            parked_secs,
            "Ticket redeemed"
        );
        Ok(car.plate_number().to_string())
    }

    pub fn set_parking_style(&mut self, style: ParkingStyle) {
        self.attendant.set_parking_style(style);
    }

    pub fn parking_style(&self) -> ParkingStyle {
        self.attendant.parking_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk_with_lots(limits: &[usize]) -> ParkingDesk {
        let config = ParkingConfig {
            style: ParkingStyle::Default,
            lots: limits.to_vec(),
        };
        ParkingDesk::from_config(&config).unwrap()
    }

    #[test]
    fn test_from_config_registers_lots_and_style() {
        let config = ParkingConfig {
            style: ParkingStyle::Max,
            lots: vec![2, 4],
        };
        let desk = ParkingDesk::from_config(&config).unwrap();

        assert_eq!(desk.parking_style(), ParkingStyle::Max);
        assert_eq!(
            desk.available_parking_lot(),
            vec![
                LotSummary {
                    limit: 2,
                    vacancy: 2
                },
                LotSummary {
                    limit: 4,
                    vacancy: 4
                },
            ]
        );
    }

    #[test]
    fn test_from_config_rejects_zero_limit() {
        let config = ParkingConfig {
            style: ParkingStyle::Default,
            lots: vec![0],
        };
        assert!(matches!(
            ParkingDesk::from_config(&config),
            Err(ParkingError::LimitInvalid)
        ));
    }

    #[test]
    fn test_assign_parking_lot() {
        let mut desk = ParkingDesk::new(Attendant::new());

        let summary = desk.assign_parking_lot(3).unwrap();

        assert_eq!(
            summary,
            LotSummary {
                limit: 3,
                vacancy: 3
            }
        );
        assert_eq!(desk.available_parking_lot().len(), 1);
        assert_eq!(desk.assign_parking_lot(0), Err(ParkingError::LimitInvalid));
    }

    #[test]
    fn test_park_and_unpark_by_id() {
        let mut desk = desk_with_lots(&[2]);

        let ticket_id = desk.park("B1234AAA").unwrap();
        assert_eq!(desk.available_parking_lot()[0].vacancy, 1);

        assert_eq!(desk.unpark(&ticket_id).unwrap(), "B1234AAA");
        assert_eq!(desk.available_parking_lot()[0].vacancy, 2);
    }

    #[test]
    fn test_same_plate_parks_as_separate_cars() {
        let mut desk = desk_with_lots(&[5]);

        let first = desk.park("B1234AAA").unwrap();
        let second = desk.park("B1234AAA").unwrap();

        assert_ne!(first, second);
        assert_eq!(desk.available_parking_lot()[0].vacancy, 3);
        assert_eq!(desk.unpark(&first).unwrap(), "B1234AAA");
        assert_eq!(desk.unpark(&second).unwrap(), "B1234AAA");
        assert_eq!(desk.available_parking_lot()[0].vacancy, 5);
    }

    #[test]
    fn test_plate_can_park_again_after_unpark() {
        let mut desk = desk_with_lots(&[5]);
        let ticket_id = desk.park("B1234AAA").unwrap();
        desk.unpark(&ticket_id).unwrap();

        let second_id = desk.park("B1234AAA").unwrap();

        assert_ne!(ticket_id, second_id);
    }

    #[test]
    fn test_unpark_unknown_id_fails() {
        let mut desk = desk_with_lots(&[5]);
        assert_eq!(
            desk.unpark("not-a-ticket"),
            Err(ParkingError::UnrecognizedTicket)
        );
    }

    #[test]
    fn test_ticket_id_is_single_use() {
        let mut desk = desk_with_lots(&[5]);
        let ticket_id = desk.park("B1234AAA").unwrap();
        desk.unpark(&ticket_id).unwrap();

        assert_eq!(desk.unpark(&ticket_id), Err(ParkingError::UnrecognizedTicket));
    }

    #[test]
    fn test_park_without_lots_fails() {
        let mut desk = ParkingDesk::new(Attendant::new());
        assert_eq!(desk.park("B1234AAA"), Err(ParkingError::NoPosition));
    }

    #[test]
    fn test_set_parking_style() {
        let mut desk = desk_with_lots(&[3, 5]);
        desk.set_parking_style(ParkingStyle::Max);
        desk.park("B1234AAA").unwrap();

        let lots = desk.available_parking_lot();
        assert_eq!(lots[0].vacancy, 3);
        assert_eq!(lots[1].vacancy, 4);
    }
}
