//! Scenario pricing and cross-facility ranking

use serde::{Deserialize, Serialize};

use crate::catalog::FacilityPricing;

/// Binary-prefixed GB per TB, matching the dataset's unit prices
pub const GB_PER_TB: f64 = 1024.0;

/// Label attached to the cheapest row of a ranking
pub const CHEAPEST_LABEL: &str = "Cheapest";

/// A workload shape used to price every facility identically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostScenario {
    /// Reference-shape compute instances
    pub compute_instances: u32,
    /// Block storage in TB
    pub storage_tb: f64,
    /// Monthly egress in TB
    pub data_transfer_tb: f64,
    /// Reference-shape database instances
    pub database_instances: u32,
}

impl Default for CostScenario {
    /// The reference workload: 1 instance, 1 TB storage, 10 TB egress,
    /// 1 database
    fn default() -> Self {
        Self {
            compute_instances: 1,
            storage_tb: 1.0,
            data_transfer_tb: 10.0,
            database_instances: 1,
        }
    }
}

/// Monthly cost of one scenario at one facility, by component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEstimate {
    /// Facility the estimate prices
    pub facility_id: String,
    /// Compute component in $/month
    pub compute: f64,
    /// Storage component in $/month
    pub storage: f64,
    /// Egress component in $/month
    pub data_transfer: f64,
    /// Database component in $/month
    pub database: f64,
    /// Exact sum of the four components
    pub total: f64,
}

/// Price a workload at one facility.
///
/// Linear in every scenario dimension; nothing is rounded here, so the
/// total is the exact floating-point sum of the components.
pub fn price_scenario(pricing: &FacilityPricing, scenario: &CostScenario) -> ScenarioEstimate {
    let compute = pricing.compute.price_per_month * scenario.compute_instances as f64;
    let storage = pricing.storage.price_per_gb_month * scenario.storage_tb * GB_PER_TB;
    let data_transfer =
        pricing.data_transfer.egress_price_per_gb * scenario.data_transfer_tb * GB_PER_TB;
    let database = pricing.database.price_per_month * scenario.database_instances as f64;

    ScenarioEstimate {
        facility_id: pricing.facility_id.clone(),
        compute,
        storage,
        data_transfer,
        database,
        total: compute + storage + data_transfer + database,
    }
}

/// A scenario estimate annotated with its cost relative to the cheapest
/// facility in the comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEstimate {
    /// The priced scenario
    pub estimate: ScenarioEstimate,
    /// `"Cheapest"` for the first row, `"+N%"` above the minimum for the
    /// rest
    pub relative_to_min: String,
}

/// Price every row and sort ascending by total.
///
/// The first row is labelled [`CHEAPEST_LABEL`]; every other row gets
/// `"+N%"` with N the whole-percent premium over the minimum. Ties keep
/// dataset order and show `"+0%"`.
pub fn rank_by_price(rows: &[FacilityPricing], scenario: &CostScenario) -> Vec<RankedEstimate> {
    let mut estimates: Vec<ScenarioEstimate> =
        rows.iter().map(|row| price_scenario(row, scenario)).collect();
    estimates.sort_by(|a, b| a.total.partial_cmp(&b.total).unwrap());

    let min = match estimates.first() {
        Some(first) => first.total,
        None => return Vec::new(),
    };

    estimates
        .into_iter()
        .enumerate()
        .map(|(i, estimate)| {
            let relative_to_min = if i == 0 {
                CHEAPEST_LABEL.to_string()
            } else {
                let premium = (100.0 * (estimate.total - min) / min).round() as i64;
                format!("+{}%", premium)
            };
            RankedEstimate {
                estimate,
                relative_to_min,
            }
        })
        .collect()
}

/// Cheapest pricing row for a workload.
///
/// Without a scenario the precomputed baseline totals decide; with one,
/// every row is re-priced first. Ties keep the earlier row. `None` only
/// for an empty slice.
pub fn cheapest<'a>(
    rows: &'a [FacilityPricing],
    scenario: Option<&CostScenario>,
) -> Option<&'a FacilityPricing> {
    match scenario {
        None => rows.iter().min_by(|a, b| {
            a.total_baseline_monthly
                .partial_cmp(&b.total_baseline_monthly)
                .unwrap()
        }),
        Some(scenario) => {
            // Price each row once, then compare the cached totals
            let totals: Vec<f64> = rows
                .iter()
                .map(|row| price_scenario(row, scenario).total)
                .collect();
            rows.iter()
                .zip(&totals)
                .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
                .map(|(row, _)| row)
        }
    }
}
