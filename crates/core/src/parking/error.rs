//! Error types for the parking module.

use thiserror::Error;

/// Sentinel errors for parking operations.
///
/// All of these are driven by user input; none are transient, so callers
/// report them and move on rather than retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// Ticket is not held by the lot (or by any lot of the attendant).
    #[error("unrecognized parking ticket")]
    UnrecognizedTicket,

    /// No lot has a free slot.
    #[error("no available position")]
    NoPosition,

    /// The car already occupies a slot.
    #[error("cannot park twice")]
    CannotParkTwice,

    /// Parking style name or menu option does not map to a style.
    #[error("unrecognized parking style option")]
    UnrecognizedStyle,

    /// Lot limit is not a positive integer.
    #[error("limit is invalid")]
    LimitInvalid,

    /// Main menu option is not recognized.
    #[error("unrecognized menu option")]
    UnrecognizedOptionMenu,
}

impl ParkingError {
    /// Short label used for metrics and structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnrecognizedTicket => "unrecognized_ticket",
            Self::NoPosition => "no_position",
            Self::CannotParkTwice => "cannot_park_twice",
            Self::UnrecognizedStyle => "unrecognized_style",
            Self::LimitInvalid => "limit_invalid",
            Self::UnrecognizedOptionMenu => "unrecognized_option_menu",
        }
    }
}
