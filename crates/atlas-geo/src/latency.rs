//! Round-trip latency estimation from great-circle distance

use serde::{Deserialize, Serialize};

use atlas_common::{Facility, InsufficientInputError};

use crate::distance::{distance_km, km_to_miles};

/// Propagation delay in fiber, microseconds per km (~200,000 km/s)
const PROPAGATION_US_PER_KM: f64 = 5.0;

/// Fiber paths are longer than the great circle
const ROUTING_OVERHEAD: f64 = 1.3;

/// Spacing between routing/amplification hops in km
const KM_PER_HOP: f64 = 500.0;

/// Equipment delay added per hop in ms
const HOP_DELAY_MS: f64 = 0.5;

/// Headroom for queueing under load
const CONGESTION_BUFFER: f64 = 1.15;

/// Round to one decimal place, the display precision for RTT figures
fn round1(ms: f64) -> f64 {
    (ms * 10.0).round() / 10.0
}

/// Estimated round-trip time in ms for a path of the given great-circle
/// length, rounded to one decimal place.
///
/// One-way delay is propagation in fiber times a routing-overhead factor,
/// plus a fixed per-hop equipment delay with one hop per started 500 km
/// segment. Round trip doubles that and adds a congestion buffer.
pub fn estimate_latency_ms(distance_km: f64) -> f64 {
    let base_ms = distance_km * PROPAGATION_US_PER_KM / 1000.0;
    let routed_ms = base_ms * ROUTING_OVERHEAD;
    let hops = (distance_km / KM_PER_HOP).ceil();
    let one_way_ms = routed_ms + hops * HOP_DELAY_MS;

    round1(one_way_ms * 2.0 * CONGESTION_BUFFER)
}

/// Qualitative RTT band used for coloring and copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyCategory {
    /// Below 10 ms, synchronous replication territory
    Excellent,
    /// 10-30 ms, fine for interactive traffic
    Good,
    /// 30-60 ms, noticeable for chatty protocols
    Acceptable,
    /// 60 ms and up, plan for asynchronous patterns
    High,
}

impl LatencyCategory {
    /// Band for a round-trip time in ms
    pub fn for_rtt_ms(rtt_ms: f64) -> Self {
        if rtt_ms < 10.0 {
            LatencyCategory::Excellent
        } else if rtt_ms < 30.0 {
            LatencyCategory::Good
        } else if rtt_ms < 60.0 {
            LatencyCategory::Acceptable
        } else {
            LatencyCategory::High
        }
    }

    /// Lowercase identifier, matches the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            LatencyCategory::Excellent => "excellent",
            LatencyCategory::Good => "good",
            LatencyCategory::Acceptable => "acceptable",
            LatencyCategory::High => "high",
        }
    }

    /// Marker/link color for this band
    pub fn color(&self) -> &'static str {
        match self {
            LatencyCategory::Excellent => "#22c55e",
            LatencyCategory::Good => "#84cc16",
            LatencyCategory::Acceptable => "#f59e0b",
            LatencyCategory::High => "#ef4444",
        }
    }

    /// One-line guidance shown next to an estimate
    pub fn note(&self) -> &'static str {
        match self {
            LatencyCategory::Excellent => "Suitable for synchronous replication",
            LatencyCategory::Good => "Good for interactive applications",
            LatencyCategory::Acceptable => "Acceptable for most workloads",
            LatencyCategory::High => "Consider async replication patterns",
        }
    }
}

/// Color for a round-trip time, shorthand over [`LatencyCategory`]
pub fn latency_color(rtt_ms: f64) -> &'static str {
    LatencyCategory::for_rtt_ms(rtt_ms).color()
}

/// Human-readable RTT, one decimal place with sub-millisecond floor
pub fn format_latency(rtt_ms: f64) -> String {
    if rtt_ms < 1.0 {
        "< 1 ms".to_string()
    } else {
        format!("{:.1} ms", rtt_ms)
    }
}

/// Latency estimate for one ordered facility pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyEstimate {
    /// Origin facility id
    pub origin_id: String,
    /// Origin display name
    pub origin_name: String,
    /// Destination facility id
    pub destination_id: String,
    /// Destination display name
    pub destination_name: String,
    /// Great-circle distance, rounded to whole km
    pub distance_km: f64,
    /// Great-circle distance, rounded to whole miles
    pub distance_miles: f64,
    /// Estimated round-trip time in ms, one decimal place
    pub rtt_ms: f64,
    /// Qualitative band for the RTT
    pub category: LatencyCategory,
    /// Guidance copy for the band
    pub note: String,
}

/// Estimate the round-trip time between two facilities
pub fn estimate_between(origin: &Facility, destination: &Facility) -> LatencyEstimate {
    let km = distance_km(origin.lat, origin.lng, destination.lat, destination.lng);
    let rtt_ms = estimate_latency_ms(km);
    let category = LatencyCategory::for_rtt_ms(rtt_ms);

    LatencyEstimate {
        origin_id: origin.id.clone(),
        origin_name: origin.display_name().to_string(),
        destination_id: destination.id.clone(),
        destination_name: destination.display_name().to_string(),
        distance_km: km.round(),
        distance_miles: km_to_miles(km).round(),
        rtt_ms,
        category,
        note: category.note().to_string(),
    }
}

/// Pairwise latency picture over a selection of facilities
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiRegionSummary {
    /// Mean pair RTT in ms, one decimal place
    pub average_latency_ms: f64,
    /// Worst pair RTT in ms, one decimal place
    pub max_latency_ms: f64,
    /// One estimate per unordered pair, selection order
    pub pairs: Vec<LatencyEstimate>,
}

/// Estimate every unordered facility pair in the selection.
///
/// Pairs appear in selection order: (0,1), (0,2), ..., (1,2), ... Requires
/// at least two facilities.
pub fn multi_region_summary(
    facilities: &[Facility],
) -> Result<MultiRegionSummary, InsufficientInputError> {
    if facilities.len() < 2 {
        return Err(InsufficientInputError {
            required: 2,
            actual: facilities.len(),
        });
    }

    let mut pairs = Vec::with_capacity(facilities.len() * (facilities.len() - 1) / 2);
    for i in 0..facilities.len() {
        for j in (i + 1)..facilities.len() {
            pairs.push(estimate_between(&facilities[i], &facilities[j]));
        }
    }

    let max = pairs.iter().map(|p| p.rtt_ms).fold(0.0_f64, f64::max);
    let sum: f64 = pairs.iter().map(|p| p.rtt_ms).sum();
    let average = sum / pairs.len() as f64;

    Ok(MultiRegionSummary {
        average_latency_ms: round1(average),
        max_latency_ms: round1(max),
        pairs,
    })
}
