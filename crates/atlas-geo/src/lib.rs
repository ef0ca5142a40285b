//! Great-circle distance and latency estimation
//!
//! Models the round-trip time a packet would see between two facilities
//! from geography alone: haversine distance, fiber propagation delay,
//! routing overhead, and per-hop equipment delay. Estimates are planning
//! figures, not measurements.

pub mod distance;
pub mod latency;

pub use distance::{distance_km, km_to_miles, nearest_facility};
pub use latency::{
    estimate_between, estimate_latency_ms, format_latency, latency_color, multi_region_summary,
    LatencyCategory, LatencyEstimate, MultiRegionSummary,
};
