//! Snapshot building, validation, and atomic publication

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};

use atlas_common::Facility;
use atlas_display::{is_valid_hex_color, ProviderStyle, ProviderStyles};
use atlas_pricing::{FacilityPricing, PricingCatalog};

use crate::source::DatasetSource;
use crate::RegistryError;

/// One immutable, fully validated view of the dataset.
///
/// Everything the computation crates consume comes out of a snapshot;
/// records inside are never patched in place, a sync produces a whole new
/// snapshot instead.
#[derive(Debug, Clone)]
pub struct AtlasSnapshot {
    /// Valid facilities in dataset order
    pub facilities: Vec<Facility>,
    /// Pricing rows keyed by facility id
    pub pricing: PricingCatalog,
    /// Provider brand styles, case-insensitive lookup
    pub providers: ProviderStyles,
    /// When this snapshot was built
    pub loaded_at: DateTime<Utc>,
}

impl AtlasSnapshot {
    /// Facility by id
    pub fn facility(&self, facility_id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == facility_id)
    }

    /// Pricing for a facility; `None` means the facility is unpriced,
    /// which is a legitimate dataset state, not an error
    pub fn pricing_for(&self, facility_id: &str) -> Option<&FacilityPricing> {
        self.pricing.get(facility_id)
    }
}

/// Holder of the current dataset snapshot.
///
/// Readers grab an `Arc` and keep computing against it even while a
/// reload swaps in a replacement; a failed reload leaves the previous
/// snapshot untouched.
#[derive(Debug)]
pub struct AtlasRegistry {
    snapshot: ArcSwap<AtlasSnapshot>,
}

impl AtlasRegistry {
    /// Load and validate a dataset, failing when no valid facilities
    /// remain
    pub fn load(source: &dyn DatasetSource) -> Result<Self, RegistryError> {
        let snapshot = build_snapshot(source)?;
        Ok(Self {
            snapshot: ArcSwap::from_pointee(snapshot),
        })
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<AtlasSnapshot> {
        self.snapshot.load_full()
    }

    /// Replace the snapshot from a fresh dataset read. On error the
    /// current snapshot stays in place.
    pub fn reload(&self, source: &dyn DatasetSource) -> Result<(), RegistryError> {
        let snapshot = build_snapshot(source)?;
        self.snapshot.store(Arc::new(snapshot));
        Ok(())
    }
}

fn build_snapshot(source: &dyn DatasetSource) -> Result<AtlasSnapshot, RegistryError> {
    let facilities = validate_facilities(source.load_facilities()?);
    if facilities.is_empty() {
        return Err(RegistryError::EmptyDataset);
    }

    let pricing = PricingCatalog::from_rows(validate_pricing(source.load_pricing()?));
    let providers = ProviderStyles::from_styles(validate_provider_styles(
        source.load_provider_styles()?,
    ));

    tracing::info!(
        "dataset loaded: {} facilities, {} pricing rows, {} provider styles",
        facilities.len(),
        pricing.len(),
        providers.len()
    );

    Ok(AtlasSnapshot {
        facilities,
        pricing,
        providers,
        loaded_at: Utc::now(),
    })
}

/// Drop facilities the computation layer could choke on: empty or
/// duplicate ids and out-of-range coordinates.
fn validate_facilities(records: Vec<Facility>) -> Vec<Facility> {
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(records.len());
    let mut valid = Vec::with_capacity(records.len());

    for facility in records {
        if facility.id.is_empty() {
            tracing::warn!("skipping facility with empty id (name: {:?})", facility.name);
            continue;
        }
        if !coordinate_in_range(facility.lat, facility.lng) {
            tracing::warn!(
                "skipping facility {}: coordinates out of range ({}, {})",
                facility.id,
                facility.lat,
                facility.lng
            );
            continue;
        }
        if !seen_ids.insert(facility.id.clone()) {
            tracing::warn!("skipping duplicate facility id {}", facility.id);
            continue;
        }
        valid.push(facility);
    }

    valid
}

fn coordinate_in_range(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

/// Drop pricing rows with unusable figures so estimates stay finite
fn validate_pricing(rows: Vec<FacilityPricing>) -> Vec<FacilityPricing> {
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut valid = Vec::with_capacity(rows.len());

    for row in rows {
        if row.facility_id.is_empty() {
            tracing::warn!("skipping pricing row with empty facility id");
            continue;
        }
        let figures = [
            row.compute.price_per_hour,
            row.compute.price_per_month,
            row.storage.price_per_gb_month,
            row.data_transfer.egress_price_per_gb,
            row.database.price_per_hour,
            row.database.price_per_month,
            row.total_baseline_monthly,
        ];
        if figures.iter().any(|v| !v.is_finite() || *v < 0.0) {
            tracing::warn!("skipping pricing row {}: invalid price figure", row.facility_id);
            continue;
        }
        if !seen_ids.insert(row.facility_id.clone()) {
            tracing::warn!("skipping duplicate pricing row {}", row.facility_id);
            continue;
        }
        valid.push(row);
    }

    valid
}

/// Drop provider styles whose color would not render
fn validate_provider_styles(styles: Vec<ProviderStyle>) -> Vec<ProviderStyle> {
    let mut valid = Vec::with_capacity(styles.len());

    for style in styles {
        if style.name.is_empty() {
            tracing::warn!("skipping provider style with empty name");
            continue;
        }
        if !is_valid_hex_color(&style.color) {
            tracing::warn!(
                "skipping provider style {}: bad color {:?}",
                style.name,
                style.color
            );
            continue;
        }
        valid.push(style);
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{InMemorySource, JsonDirectorySource, FACILITIES_FILE, PRICING_FILE, PROVIDERS_FILE};
    use atlas_pricing::{ComputePricing, DatabasePricing, StoragePricing, TransferPricing};
    use std::fs;

    fn facility(id: &str, lat: f64, lng: f64) -> Facility {
        Facility::new(id, id, "AWS", lat, lng, "VA")
    }

    fn pricing_row(facility_id: &str) -> FacilityPricing {
        FacilityPricing {
            facility_id: facility_id.to_string(),
            compute: ComputePricing::from_hourly(0.096),
            storage: StoragePricing {
                price_per_gb_month: 0.023,
            },
            data_transfer: TransferPricing {
                egress_price_per_gb: 0.09,
            },
            database: DatabasePricing::from_hourly(0.192),
            total_baseline_monthly: 1152.0,
        }
    }

    fn good_source() -> InMemorySource {
        InMemorySource::new()
            .with_facilities(vec![facility("a", 38.95, -77.45), facility("b", 45.59, -121.18)])
            .with_pricing(vec![pricing_row("a"), pricing_row("retired-site")])
            .with_provider_styles(vec![ProviderStyle::new("AWS", "#232f3e")])
    }

    #[test]
    fn test_load_good_dataset() {
        let registry = AtlasRegistry::load(&good_source()).unwrap();
        let snapshot = registry.snapshot();

        assert_eq!(snapshot.facilities.len(), 2);
        assert!(snapshot.facility("a").is_some());
        assert!(snapshot.facility("missing").is_none());
        assert!(snapshot.providers.get("aws").is_some());

        // "b" is unpriced, which is fine
        assert!(snapshot.pricing_for("a").is_some());
        assert!(snapshot.pricing_for("b").is_none());
        // The join is optional in the other direction too
        assert!(snapshot.pricing_for("retired-site").is_some());

        assert!(format!("{:?}", registry).starts_with("AtlasRegistry"));
    }

    #[test]
    fn test_malformed_facilities_are_skipped() {
        let source = InMemorySource::new().with_facilities(vec![
            facility("good", 38.95, -77.45),
            facility("", 10.0, 10.0),
            facility("polar", 95.0, 0.0),
            facility("wrapped", 0.0, 200.0),
            facility("nan", f64::NAN, 0.0),
            facility("good", 20.0, 20.0),
        ]);

        let registry = AtlasRegistry::load(&source).unwrap();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.facilities.len(), 1);
        assert_eq!(snapshot.facilities[0].id, "good");
        // The duplicate kept the first record's coordinates
        assert_eq!(snapshot.facilities[0].lat, 38.95);
    }

    #[test]
    fn test_invalid_rows_and_styles_are_skipped() {
        let mut negative = pricing_row("neg");
        negative.storage.price_per_gb_month = -0.01;
        let mut infinite = pricing_row("inf");
        infinite.total_baseline_monthly = f64::INFINITY;
        let mut duplicate = pricing_row("a");
        duplicate.total_baseline_monthly = 9999.0;

        let source = good_source()
            .with_pricing(vec![pricing_row("a"), negative, infinite, duplicate])
            .with_provider_styles(vec![
                ProviderStyle::new("AWS", "#232f3e"),
                ProviderStyle::new("Broken", "#12345"),
                ProviderStyle::new("", "#ffffff"),
            ]);

        let snapshot = AtlasRegistry::load(&source).unwrap().snapshot();
        assert_eq!(snapshot.pricing.len(), 1);
        assert!(snapshot.pricing_for("neg").is_none());
        // First row for an id wins, the duplicate is dropped
        assert_eq!(snapshot.pricing_for("a").unwrap().total_baseline_monthly, 1152.0);
        assert_eq!(snapshot.providers.len(), 1);
        assert!(snapshot.providers.get("broken").is_none());
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let source = InMemorySource::new().with_facilities(vec![facility("polar", 95.0, 0.0)]);
        let err = AtlasRegistry::load(&source).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyDataset));
    }

    #[test]
    fn test_reload_swaps_snapshot() {
        let registry = AtlasRegistry::load(&good_source()).unwrap();
        let before = registry.snapshot();
        assert_eq!(before.facilities.len(), 2);

        let bigger = good_source().with_facilities(vec![
            facility("a", 38.95, -77.45),
            facility("b", 45.59, -121.18),
            facility("c", 47.23, -119.85),
        ]);
        registry.reload(&bigger).unwrap();

        assert_eq!(registry.snapshot().facilities.len(), 3);
        // The old handle still sees the pre-reload world
        assert_eq!(before.facilities.len(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_current_snapshot() {
        let registry = AtlasRegistry::load(&good_source()).unwrap();
        let empty = InMemorySource::new();

        assert!(registry.reload(&empty).is_err());
        assert_eq!(registry.snapshot().facilities.len(), 2);
    }

    #[test]
    fn test_json_directory_source() {
        let dir = std::env::temp_dir().join(format!("atlas-registry-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FACILITIES_FILE),
            r#"[{
                "id": "aws-us-east-1",
                "name": "US East (N. Virginia)",
                "provider": "AWS",
                "lat": 38.9517,
                "lng": -77.448,
                "state": "VA",
                "metadata": {"providerType": "hyperscale-cloud", "capacityMW": 250}
            }]"#,
        )
        .unwrap();
        fs::write(
            dir.join(PRICING_FILE),
            r#"[{
                "facilityId": "aws-us-east-1",
                "compute": {"pricePerHour": 0.096, "pricePerMonth": 69.12},
                "storage": {"pricePerGbMonth": 0.023},
                "dataTransfer": {"egressPricePerGb": 0.09},
                "database": {"pricePerHour": 0.192, "pricePerMonth": 138.24},
                "totalBaselineMonthly": 1152.0
            }]"#,
        )
        .unwrap();
        fs::write(
            dir.join(PROVIDERS_FILE),
            r##"[{"name": "AWS", "color": "#232f3e"}]"##,
        )
        .unwrap();

        let registry = AtlasRegistry::load(&JsonDirectorySource::new(&dir)).unwrap();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.facilities.len(), 1);
        assert_eq!(snapshot.facilities[0].capacity_mw(), Some(250.0));
        assert!(snapshot.pricing_for("aws-us-east-1").is_some());
        assert_eq!(snapshot.providers.get("aws").unwrap().color, "#232f3e");

        fs::remove_dir_all(&dir).ok();

        let err = AtlasRegistry::load(&JsonDirectorySource::new(dir.join("gone"))).unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }
}
