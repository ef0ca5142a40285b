//! Per-facility unit pricing reference data

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::estimate::{price_scenario, rank_by_price, CostScenario, RankedEstimate, ScenarioEstimate};

/// Billable hours in the pricing model's month
pub const HOURS_PER_MONTH: f64 = 720.0;

/// Unit prices for the reference compute instance shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputePricing {
    /// $/hour
    pub price_per_hour: f64,
    /// $/month at 720 billable hours
    pub price_per_month: f64,
}

impl ComputePricing {
    /// Derive the monthly rate from an hourly one
    pub fn from_hourly(price_per_hour: f64) -> Self {
        Self {
            price_per_hour,
            price_per_month: price_per_hour * HOURS_PER_MONTH,
        }
    }
}

/// Unit price for block storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoragePricing {
    /// $/GB-month
    pub price_per_gb_month: f64,
}

/// Unit price for network egress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPricing {
    /// $/GB leaving the facility
    pub egress_price_per_gb: f64,
}

/// Unit prices for the reference database instance shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabasePricing {
    /// $/hour
    pub price_per_hour: f64,
    /// $/month at 720 billable hours
    pub price_per_month: f64,
}

impl DatabasePricing {
    /// Derive the monthly rate from an hourly one
    pub fn from_hourly(price_per_hour: f64) -> Self {
        Self {
            price_per_hour,
            price_per_month: price_per_hour * HOURS_PER_MONTH,
        }
    }
}

/// Unit pricing for one facility, joined to the facility record by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityPricing {
    /// Facility this row prices
    pub facility_id: String,
    /// Compute unit prices
    pub compute: ComputePricing,
    /// Storage unit price
    pub storage: StoragePricing,
    /// Egress unit price
    pub data_transfer: TransferPricing,
    /// Database unit prices
    pub database: DatabasePricing,
    /// Precomputed monthly total for the reference workload
    pub total_baseline_monthly: f64,
}

impl FacilityPricing {
    /// Price the reference workload from the unit prices.
    ///
    /// Computed from scratch rather than read from
    /// `total_baseline_monthly`, so it also serves as a consistency check
    /// on the dataset's precomputed figure.
    pub fn baseline_estimate(&self) -> ScenarioEstimate {
        price_scenario(self, &CostScenario::default())
    }
}

/// Pricing rows indexed by facility id, preserving dataset order
#[derive(Debug, Clone, Default)]
pub struct PricingCatalog {
    rows: Vec<FacilityPricing>,
    by_id: HashMap<String, usize>,
}

impl PricingCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from dataset rows. Later duplicates replace earlier
    /// ones.
    pub fn from_rows(rows: Vec<FacilityPricing>) -> Self {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert(row);
        }
        catalog
    }

    /// Insert a row, replacing any existing row for the same facility
    pub fn insert(&mut self, row: FacilityPricing) {
        match self.by_id.get(&row.facility_id) {
            Some(&index) => self.rows[index] = row,
            None => {
                self.by_id.insert(row.facility_id.clone(), self.rows.len());
                self.rows.push(row);
            }
        }
    }

    /// Pricing row for a facility, `None` when the facility is unpriced
    pub fn get(&self, facility_id: &str) -> Option<&FacilityPricing> {
        self.by_id.get(facility_id).map(|&index| &self.rows[index])
    }

    /// All rows in dataset order
    pub fn rows(&self) -> &[FacilityPricing] {
        &self.rows
    }

    /// Number of priced facilities
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no facility is priced
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Price and rank a selection of facilities by id. Ids without a
    /// pricing row are silently skipped, matching the "unpriced facility"
    /// join policy.
    pub fn rank_for_ids(&self, facility_ids: &[&str], scenario: &CostScenario) -> Vec<RankedEstimate> {
        let rows: Vec<FacilityPricing> = facility_ids
            .iter()
            .filter_map(|id| self.get(id).cloned())
            .collect();
        rank_by_price(&rows, scenario)
    }
}
