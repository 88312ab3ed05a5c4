//! Identity records for the parking domain.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Identity Handles
// ============================================================================

/// Opaque identity of a [`Car`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarId(Uuid);

/// Opaque identity of a [`Ticket`].
///
/// Rendered as a hyphenated UUID string; this is the ID printed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

/// Opaque identity of a [`Lot`](super::Lot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LotId(Uuid);

macro_rules! impl_handle {
    ($name:ident) => {
        impl $name {
            /// Mint a fresh, globally-unique handle.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_handle!(CarId);
impl_handle!(TicketId);
impl_handle!(LotId);

// ============================================================================
// Car
// ============================================================================

/// A car, identified by its handle rather than by its plate number.
///
/// Two cars built from the same plate number are distinct occupants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    id: CarId,
    plate_number: String,
}

impl Car {
    /// Create a car with a freshly minted identity.
    pub fn new(plate_number: impl Into<String>) -> Self {
        Self {
            id: CarId::new(),
            plate_number: plate_number.into(),
        }
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    /// Plate number, a display field only.
    pub fn plate_number(&self) -> &str {
        &self.plate_number
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// Token handed out on every successful park.
///
/// A ticket is only honored by the lot that issued it, and only until the car
/// it refers to has been unparked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    id: TicketId,
    issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Mint a ticket that no lot knows about yet.
    pub fn new() -> Self {
        Self {
            id: TicketId::new(),
            issued_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Self::new()
    }
}
