//! Lot selection styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParkingError;
use super::lot::Lot;

/// Policy the attendant uses to pick a lot among the available ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParkingStyle {
    /// First candidate, in the order handed in.
    #[default]
    Default,

    /// Candidate with the largest limit.
    Max,

    /// Candidate with the most free slots.
    Vacant,
}

impl ParkingStyle {
    /// All styles, in menu order.
    pub const ALL: [ParkingStyle; 3] = [Self::Default, Self::Max, Self::Vacant];

    /// Pick a lot from `candidates`.
    ///
    /// Ties go to the earliest candidate.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty. Callers check availability first.
    pub fn choose_lot<'a>(&self, candidates: &[&'a Lot]) -> &'a Lot {
        let (first, rest) = candidates
            .split_first()
            .unwrap_or_else(|| panic!("{} style asked to choose from no lots", self));

        match self {
            Self::Default => *first,
            Self::Max => rest.iter().fold(*first, |largest, lot| {
                if lot.limit() > largest.limit() {
                    *lot
                } else {
                    largest
                }
            }),
            Self::Vacant => rest.iter().fold(*first, |spacious, lot| {
                if lot.calculate_vacancy() > spacious.calculate_vacancy() {
                    *lot
                } else {
                    spacious
                }
            }),
        }
    }

    /// Configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Max => "max",
            Self::Vacant => "vacant",
        }
    }

    /// Human-readable label for menus.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Max => "Largest Limit Lot",
            Self::Vacant => "Most Vacant Lot",
        }
    }
}

impl fmt::Display for ParkingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParkingStyle {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "max" => Ok(Self::Max),
            "vacant" => Ok(Self::Vacant),
            _ => Err(ParkingError::UnrecognizedStyle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parking::Car;

    fn lots(limits: &[usize]) -> Vec<Lot> {
        limits.iter().map(|&limit| Lot::new(limit).unwrap()).collect()
    }

    #[test]
    fn test_default_picks_first() {
        let lots = lots(&[3, 5]);
        let candidates: Vec<&Lot> = lots.iter().collect();

        let chosen = ParkingStyle::Default.choose_lot(&candidates);

        assert_eq!(chosen.id(), lots[0].id());
    }

    #[test]
    fn test_max_picks_largest_limit() {
        let lots = lots(&[3, 2, 5]);
        let candidates: Vec<&Lot> = lots.iter().collect();

        let chosen = ParkingStyle::Max.choose_lot(&candidates);

        assert_eq!(chosen.id(), lots[2].id());
    }

    #[test]
    fn test_max_tie_keeps_earliest() {
        let lots = lots(&[2, 5, 5]);
        let candidates: Vec<&Lot> = lots.iter().collect();

        let chosen = ParkingStyle::Max.choose_lot(&candidates);

        assert_eq!(chosen.id(), lots[1].id());
    }

    #[test]
    fn test_vacant_picks_most_free_slots() {
        let mut lots = lots(&[4, 3]);
        lots[0].park(&Car::new("B1")).unwrap();
        lots[0].park(&Car::new("B2")).unwrap();
        let candidates: Vec<&Lot> = lots.iter().collect();

        let chosen = ParkingStyle::Vacant.choose_lot(&candidates);

        assert_eq!(chosen.id(), lots[1].id());
    }

    #[test]
    fn test_vacant_tie_keeps_earliest() {
        let mut lots = lots(&[3, 2]);
        lots[0].park(&Car::new("B1")).unwrap();
        let candidates: Vec<&Lot> = lots.iter().collect();

        let chosen = ParkingStyle::Vacant.choose_lot(&candidates);

        assert_eq!(chosen.id(), lots[0].id());
    }

    #[test]
    #[should_panic(expected = "asked to choose from no lots")]
    fn test_choose_from_empty_panics() {
        ParkingStyle::Max.choose_lot(&[]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("default".parse::<ParkingStyle>(), Ok(ParkingStyle::Default));
        assert_eq!(" MAX ".parse::<ParkingStyle>(), Ok(ParkingStyle::Max));
        assert_eq!("vacant".parse::<ParkingStyle>(), Ok(ParkingStyle::Vacant));
        assert_eq!(
            "smallest".parse::<ParkingStyle>(),
            Err(ParkingError::UnrecognizedStyle)
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for style in ParkingStyle::ALL {
            assert_eq!(style.to_string().parse::<ParkingStyle>(), Ok(style));
        }
    }
}
