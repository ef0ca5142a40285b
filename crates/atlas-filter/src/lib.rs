//! Compound predicate filtering over facility records
//!
//! The map UI builds one [`FilterCriteria`] per render from its controls
//! and runs the whole facility list through it. Every predicate is ANDed;
//! an empty or default criteria object passes facilities through
//! untouched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use atlas_common::{Facility, ProviderType};

/// Capacity slider default in MW
pub const DEFAULT_CAPACITY_RANGE_MW: (f64, f64) = (0.0, 500.0);

/// PUE slider default
pub const DEFAULT_PUE_RANGE: (f64, f64) = (1.0, 2.0);

/// One render's worth of filter state.
///
/// Set predicates (`providers`, `provider_types`, `countries`) are inactive
/// while empty. Range predicates are always applied to facilities that
/// carry the field; a facility missing the field passes only while the
/// matching slider still sits at its default, so narrowing a slider
/// excludes sites with unknown readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Exact provider names to keep, case-sensitive
    pub providers: HashSet<String>,
    /// Operator classes to keep
    pub provider_types: HashSet<ProviderType>,
    /// Country codes to keep
    pub countries: HashSet<String>,
    /// Inclusive capacity window in MW
    #[serde(rename = "capacityRange")]
    pub capacity_range_mw: (f64, f64),
    /// Inclusive PUE window
    pub pue_range: (f64, f64),
    /// Keep only sites on matched renewable energy
    pub renewable_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            providers: HashSet::new(),
            provider_types: HashSet::new(),
            countries: HashSet::new(),
            capacity_range_mw: DEFAULT_CAPACITY_RANGE_MW,
            pue_range: DEFAULT_PUE_RANGE,
            renewable_only: false,
        }
    }
}

impl FilterCriteria {
    /// Criteria that pass every facility
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider name to the provider predicate
    pub fn with_provider(mut self, provider: &str) -> Self {
        self.providers.insert(provider.to_string());
        self
    }

    /// Add an operator class to the type predicate
    pub fn with_provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_types.insert(provider_type);
        self
    }

    /// Add a country code to the country predicate
    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.insert(country.to_string());
        self
    }

    /// Set the capacity window in MW
    pub fn with_capacity_range(mut self, min_mw: f64, max_mw: f64) -> Self {
        self.capacity_range_mw = (min_mw, max_mw);
        self
    }

    /// Set the PUE window
    pub fn with_pue_range(mut self, min: f64, max: f64) -> Self {
        self.pue_range = (min, max);
        self
    }

    /// Keep only renewable-powered sites
    pub fn with_renewable_only(mut self) -> Self {
        self.renewable_only = true;
        self
    }

    /// Whether a facility passes every active predicate
    pub fn matches(&self, facility: &Facility) -> bool {
        if !self.providers.is_empty() && !self.providers.contains(facility.provider.as_str()) {
            return false;
        }

        if !self.provider_types.is_empty() {
            match facility.provider_type() {
                Some(provider_type) if self.provider_types.contains(&provider_type) => {}
                _ => return false,
            }
        }

        if !self.countries.is_empty() && !self.countries.contains(facility.country_code()) {
            return false;
        }

        if !self.capacity_matches(facility.capacity_mw()) {
            return false;
        }

        if !self.pue_matches(facility.pue()) {
            return false;
        }

        if self.renewable_only && !facility.is_renewable() {
            return false;
        }

        true
    }

    fn capacity_matches(&self, capacity_mw: Option<f64>) -> bool {
        match capacity_mw {
            Some(mw) => mw >= self.capacity_range_mw.0 && mw <= self.capacity_range_mw.1,
            // Unknown capacity passes only an untouched slider
            None => self.capacity_range_mw == DEFAULT_CAPACITY_RANGE_MW,
        }
    }

    fn pue_matches(&self, pue: Option<f64>) -> bool {
        match pue {
            Some(value) => value >= self.pue_range.0 && value <= self.pue_range.1,
            None => self.pue_range == DEFAULT_PUE_RANGE,
        }
    }
}

/// Facilities passing the criteria, in input order
pub fn filter_facilities(facilities: &[Facility], criteria: &FilterCriteria) -> Vec<Facility> {
    facilities
        .iter()
        .filter(|facility| criteria.matches(facility))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_common::FacilityMetadata;

    fn fleet() -> Vec<Facility> {
        vec![
            Facility::new("aws-va", "US East", "AWS", 38.95, -77.45, "VA").with_metadata(
                FacilityMetadata::new()
                    .with_provider_type(ProviderType::HyperscaleCloud)
                    .with_capacity_mw(250.0)
                    .with_pue(1.2)
                    .with_renewable(true),
            ),
            Facility::new("aws-or", "US West", "AWS", 45.84, -119.70, "OR").with_metadata(
                FacilityMetadata::new()
                    .with_provider_type(ProviderType::HyperscaleCloud)
                    .with_capacity_mw(180.0)
                    .with_pue(1.15),
            ),
            Facility::new("eqx-dc", "DC2", "Equinix", 38.90, -77.04, "VA").with_metadata(
                FacilityMetadata::new()
                    .with_provider_type(ProviderType::Colocation)
                    .with_pue(1.45),
            ),
            Facility::new("meta-ie", "Clonee", "Meta", 53.41, -6.44, "D")
                .with_country("IE")
                .with_metadata(
                    FacilityMetadata::new()
                        .with_capacity_mw(120.0)
                        .with_renewable(true),
                ),
        ]
    }

    #[test]
    fn test_default_criteria_pass_everything_in_order() {
        let facilities = fleet();
        let kept = filter_facilities(&facilities, &FilterCriteria::new());
        assert_eq!(kept, facilities);
    }

    #[test]
    fn test_provider_name_is_exact_and_case_sensitive() {
        let facilities = fleet();

        let kept = filter_facilities(&facilities, &FilterCriteria::new().with_provider("AWS"));
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|f| f.provider == "AWS"));

        let kept = filter_facilities(&facilities, &FilterCriteria::new().with_provider("aws"));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_type_filter_excludes_untyped_facilities() {
        let facilities = fleet();
        let criteria = FilterCriteria::new()
            .with_provider_type(ProviderType::HyperscaleCloud)
            .with_provider_type(ProviderType::Colocation);
        let kept = filter_facilities(&facilities, &criteria);

        // meta-ie has no providerType and drops out while the filter is active
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|f| f.id != "meta-ie"));
    }

    #[test]
    fn test_country_filter_defaults_absent_to_us() {
        let facilities = fleet();

        let kept = filter_facilities(&facilities, &FilterCriteria::new().with_country("US"));
        assert_eq!(kept.len(), 3);

        let kept = filter_facilities(&facilities, &FilterCriteria::new().with_country("IE"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "meta-ie");
    }

    #[test]
    fn test_capacity_absence_asymmetry() {
        let facilities = fleet();

        // Untouched slider keeps eqx-dc despite its unknown capacity
        let kept = filter_facilities(&facilities, &FilterCriteria::new());
        assert!(kept.iter().any(|f| f.id == "eqx-dc"));

        // Narrowing the slider drops it along with out-of-range sites
        let criteria = FilterCriteria::new().with_capacity_range(100.0, 200.0);
        let kept = filter_facilities(&facilities, &criteria);
        assert_eq!(
            kept.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["aws-or", "meta-ie"]
        );
    }

    #[test]
    fn test_pue_window_keeps_in_range_sites() {
        let facilities = fleet();
        let criteria = FilterCriteria::new().with_pue_range(1.0, 1.3);
        let kept = filter_facilities(&facilities, &criteria);

        // meta-ie has no pue reading; a narrowed window excludes it
        assert_eq!(
            kept.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["aws-va", "aws-or"]
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let facility = Facility::new("edge", "Edge", "X", 0.0, 0.0, "TX").with_metadata(
            FacilityMetadata::new().with_capacity_mw(200.0).with_pue(1.3),
        );
        let criteria = FilterCriteria::new()
            .with_capacity_range(100.0, 200.0)
            .with_pue_range(1.3, 2.0);
        assert!(criteria.matches(&facility));
    }

    #[test]
    fn test_compound_and_intersection() {
        let facilities = fleet();
        let criteria = FilterCriteria::new()
            .with_provider("AWS")
            .with_renewable_only();
        let kept = filter_facilities(&facilities, &criteria);

        // aws-or is AWS but carries no renewable flag, which reads as false
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "aws-va");
    }

    #[test]
    fn test_deserialize_partial_criteria() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"providers": ["AWS"], "renewableOnly": true}"#).unwrap();
        assert!(criteria.providers.contains("AWS"));
        assert!(criteria.renewable_only);
        assert_eq!(criteria.capacity_range_mw, DEFAULT_CAPACITY_RANGE_MW);
        assert_eq!(criteria.pue_range, DEFAULT_PUE_RANGE);

        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"capacityRange": [50.0, 300.0], "countries": ["US", "IE"]}"#)
                .unwrap();
        assert_eq!(criteria.capacity_range_mw, (50.0, 300.0));
        assert_eq!(criteria.countries.len(), 2);
    }
}
