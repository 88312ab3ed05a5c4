//! Prometheus metrics for the console front end.
//!
//! This module provides:
//! - Menu selection counts
//! - Menu input errors (bad options, limits, styles)
//! - Encoding of every registered metric, core ones included

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// Menu Metrics
// =============================================================================

/// Menu options chosen.
pub static MENU_SELECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("parkwise_menu_selections_total", "Total menu options chosen"),
        &["option"],
    )
    .unwrap()
});

/// Menu input rejected before reaching the attendant.
pub static MENU_INPUT_ERRORS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "parkwise_menu_input_errors_total",
            "Total menu inputs rejected",
        ),
        &["reason"], // "unrecognized_option_menu", "limit_invalid", "unrecognized_style"
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // Menu
    registry
        .register(Box::new(MENU_SELECTIONS.clone()))
        .unwrap();
    registry
        .register(Box::new(MENU_INPUT_ERRORS.clone()))
        .unwrap();

    // Core metrics (lots, attendant)
    for metric in parkwise_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .context("Failed to encode metrics")?;
    String::from_utf8(buffer).context("Metrics output is not valid UTF-8")
}
