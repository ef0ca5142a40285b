//! Dataset sources: where facility, pricing, and provider tables come from

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use atlas_common::Facility;
use atlas_display::ProviderStyle;
use atlas_pricing::FacilityPricing;

use crate::RegistryError;

/// Facility table file name inside a dataset directory
pub const FACILITIES_FILE: &str = "facilities.json";

/// Pricing table file name inside a dataset directory
pub const PRICING_FILE: &str = "pricing.json";

/// Provider style table file name inside a dataset directory
pub const PROVIDERS_FILE: &str = "providers.json";

/// Read-only supplier of the three dataset tables.
///
/// Implementations hand over raw records; validation happens in the
/// registry so every source gets the same treatment.
pub trait DatasetSource {
    /// Load the facility table
    fn load_facilities(&self) -> Result<Vec<Facility>, RegistryError>;

    /// Load the per-facility pricing table
    fn load_pricing(&self) -> Result<Vec<FacilityPricing>, RegistryError>;

    /// Load the provider brand style table
    fn load_provider_styles(&self) -> Result<Vec<ProviderStyle>, RegistryError>;
}

/// Dataset directory holding `facilities.json`, `pricing.json`, and
/// `providers.json`
#[derive(Debug, Clone)]
pub struct JsonDirectorySource {
    root: PathBuf,
}

impl JsonDirectorySource {
    /// Source reading from the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_table<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, RegistryError> {
        let raw = fs::read_to_string(self.root.join(file_name))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl DatasetSource for JsonDirectorySource {
    fn load_facilities(&self) -> Result<Vec<Facility>, RegistryError> {
        self.read_table(FACILITIES_FILE)
    }

    fn load_pricing(&self) -> Result<Vec<FacilityPricing>, RegistryError> {
        self.read_table(PRICING_FILE)
    }

    fn load_provider_styles(&self) -> Result<Vec<ProviderStyle>, RegistryError> {
        self.read_table(PROVIDERS_FILE)
    }
}

/// Fixture source for tests and embedded datasets
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    facilities: Vec<Facility>,
    pricing: Vec<FacilityPricing>,
    provider_styles: Vec<ProviderStyle>,
}

impl InMemorySource {
    /// Empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the facility table
    pub fn with_facilities(mut self, facilities: Vec<Facility>) -> Self {
        self.facilities = facilities;
        self
    }

    /// Set the pricing table
    pub fn with_pricing(mut self, pricing: Vec<FacilityPricing>) -> Self {
        self.pricing = pricing;
        self
    }

    /// Set the provider style table
    pub fn with_provider_styles(mut self, provider_styles: Vec<ProviderStyle>) -> Self {
        self.provider_styles = provider_styles;
        self
    }
}

impl DatasetSource for InMemorySource {
    fn load_facilities(&self) -> Result<Vec<Facility>, RegistryError> {
        Ok(self.facilities.clone())
    }

    fn load_pricing(&self) -> Result<Vec<FacilityPricing>, RegistryError> {
        Ok(self.pricing.clone())
    }

    fn load_provider_styles(&self) -> Result<Vec<ProviderStyle>, RegistryError> {
        Ok(self.provider_styles.clone())
    }
}
