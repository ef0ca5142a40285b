//! Facility records as they appear in the dataset files

use serde::{Deserialize, Serialize};

/// Broad class of operator running a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    /// AWS/Azure/GCP-scale cloud regions
    HyperscaleCloud,
    /// Multi-tenant colocation and interconnection sites
    Colocation,
    /// Large operators running their own estate (Meta, Apple, ...)
    TechGiant,
    /// Smaller cloud providers with a regional footprint
    RegionalCloud,
    /// CDN edge and peering deployments
    EdgeCdn,
}

impl ProviderType {
    /// Human-readable label for badges and legends
    pub fn label(&self) -> &'static str {
        match self {
            ProviderType::HyperscaleCloud => "Hyperscale Cloud",
            ProviderType::Colocation => "Colocation",
            ProviderType::TechGiant => "Tech Giant",
            ProviderType::RegionalCloud => "Regional Cloud",
            ProviderType::EdgeCdn => "Edge / CDN",
        }
    }
}

/// Optional descriptive attributes attached to a facility.
///
/// Every field may be missing from the dataset; consumers apply the
/// documented absence policies instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityMetadata {
    /// Operator class, drives marker shape and type filtering
    pub provider_type: Option<ProviderType>,
    /// Critical IT load in megawatts
    #[serde(rename = "capacityMW")]
    pub capacity_mw: Option<f64>,
    /// Power usage effectiveness, lower is better
    pub pue: Option<f64>,
    /// Whether the site runs on matched renewable energy
    pub renewable: Option<bool>,
    /// Provider-assigned region identifier, e.g. "us-east-1"
    pub region: Option<String>,
    /// Marketing name preferred over `Facility::name` when present
    pub display_name: Option<String>,
    /// Number of availability zones served from this site
    pub availability_zones: Option<u32>,
    /// Number of network carriers present on site
    pub carrier_count: Option<u32>,
}

impl FacilityMetadata {
    /// Empty metadata bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operator class
    pub fn with_provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    /// Set the critical IT load in MW
    pub fn with_capacity_mw(mut self, capacity_mw: f64) -> Self {
        self.capacity_mw = Some(capacity_mw);
        self
    }

    /// Set the power usage effectiveness ratio
    pub fn with_pue(mut self, pue: f64) -> Self {
        self.pue = Some(pue);
        self
    }

    /// Set the renewable-energy flag
    pub fn with_renewable(mut self, renewable: bool) -> Self {
        self.renewable = Some(renewable);
        self
    }

    /// Set the provider-assigned region identifier
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set the marketing display name
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    /// Set the availability zone count
    pub fn with_availability_zones(mut self, zones: u32) -> Self {
        self.availability_zones = Some(zones);
        self
    }

    /// Set the on-site carrier count
    pub fn with_carrier_count(mut self, carriers: u32) -> Self {
        self.carrier_count = Some(carriers);
        self
    }
}

/// A single datacenter site.
///
/// Loaded once from the dataset and treated as immutable afterwards; every
/// core operation takes facilities by reference and returns derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    /// Globally unique identifier, e.g. "aws-us-east-1"
    pub id: String,
    /// Canonical site name
    pub name: String,
    /// Brand string, case-sensitive for display
    pub provider: String,
    /// Latitude in decimal degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub lng: f64,
    /// State or province code
    pub state: String,
    /// City, when the dataset records one
    pub city: Option<String>,
    /// ISO-like 2-letter country code; absent means "US"
    pub country: Option<String>,
    /// Optional descriptive attributes
    pub metadata: Option<FacilityMetadata>,
}

impl Facility {
    /// Create a facility with the required fields only
    pub fn new(id: &str, name: &str, provider: &str, lat: f64, lng: f64, state: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
            lat,
            lng,
            state: state.to_string(),
            city: None,
            country: None,
            metadata: None,
        }
    }

    /// Set the city
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Set the country code
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    /// Attach a metadata bag
    pub fn with_metadata(mut self, metadata: FacilityMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Country code with the dataset's absence policy applied: missing
    /// country means a US site.
    pub fn country_code(&self) -> &str {
        self.country.as_deref().unwrap_or("US")
    }

    /// Name shown in the UI: the metadata display name when present,
    /// otherwise the canonical name.
    pub fn display_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .unwrap_or(&self.name)
    }

    /// Operator class, if the dataset records one
    pub fn provider_type(&self) -> Option<ProviderType> {
        self.metadata.as_ref().and_then(|m| m.provider_type)
    }

    /// Critical IT load in MW, if the dataset records one
    pub fn capacity_mw(&self) -> Option<f64> {
        self.metadata.as_ref().and_then(|m| m.capacity_mw)
    }

    /// Power usage effectiveness, if the dataset records one
    pub fn pue(&self) -> Option<f64> {
        self.metadata.as_ref().and_then(|m| m.pue)
    }

    /// Renewable-energy flag; an absent flag means not renewable.
    pub fn is_renewable(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.renewable)
            .unwrap_or(false)
    }
}
