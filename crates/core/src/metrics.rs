//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Lots (parks, unparks, full/available transitions)
//! - Attendant (registrations, rejections, available lot count)

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Lot Metrics
// =============================================================================

/// Cars parked total.
pub static CARS_PARKED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("parkwise_cars_parked_total", "Total cars parked").unwrap()
});

/// Cars unparked total.
pub static CARS_UNPARKED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("parkwise_cars_unparked_total", "Total cars unparked").unwrap()
});

/// Lot availability transitions by direction.
pub static LOT_TRANSITIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "parkwise_lot_transitions_total",
            "Total lot full/available edge transitions",
        ),
        &["direction"], // "full", "available"
    )
    .unwrap()
});

// =============================================================================
// Attendant Metrics
// =============================================================================

/// Lots registered with an attendant.
pub static LOTS_REGISTERED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("parkwise_lots_registered_total", "Total lots registered").unwrap()
});

/// Rejected park requests by reason.
pub static PARK_REJECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "parkwise_park_rejections_total",
            "Total park requests rejected",
        ),
        &["reason"], // "no_position", "cannot_park_twice"
    )
    .unwrap()
});

/// Rejected unpark requests by reason.
pub static UNPARK_REJECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "parkwise_unpark_rejections_total",
            "Total unpark requests rejected",
        ),
        &["reason"],
    )
    .unwrap()
});

/// Lots currently accepting cars.
pub static AVAILABLE_LOTS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "parkwise_available_lots",
        "Number of lots with at least one free slot",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Lots
        Box::new(CARS_PARKED.clone()),
        Box::new(CARS_UNPARKED.clone()),
        Box::new(LOT_TRANSITIONS.clone()),
        // Attendant
        Box::new(LOTS_REGISTERED.clone()),
        Box::new(PARK_REJECTIONS.clone()),
        Box::new(UNPARK_REJECTIONS.clone()),
        Box::new(AVAILABLE_LOTS.clone()),
    ]
}
