//! Workload cost estimation over per-facility unit pricing
//!
//! Unit prices are static reference data joined to facilities by id. The
//! estimator is a linear model: no rounding happens until a figure is
//! formatted for display, so component sums stay exact.

pub mod catalog;
pub mod estimate;
pub mod format;

pub use catalog::{
    ComputePricing, DatabasePricing, FacilityPricing, PricingCatalog, StoragePricing,
    TransferPricing,
};
pub use estimate::{
    cheapest, price_scenario, rank_by_price, CostScenario, RankedEstimate, ScenarioEstimate,
    CHEAPEST_LABEL,
};
pub use format::{format_currency, PricingTier};
