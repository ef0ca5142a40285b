//! Marker de-confliction for facilities sharing a map coordinate
//!
//! Facilities in the same campus often carry identical coordinates in the
//! dataset, which would stack their markers into a single click target.
//! Coincident groups are spread around a small fixed-radius circle for
//! display; the underlying records keep their true coordinates.

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::Serialize;

use atlas_common::Facility;

/// Display offset ring radius in degrees, roughly 1.7 km
pub const SPREAD_RADIUS_DEG: f64 = 0.015;

/// Coordinates are grouped at 4 decimal places, roughly 11 m
const COORD_SCALE: f64 = 10_000.0;

/// Grouping key: a coordinate rounded to 4 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    lat_e4: i64,
    lng_e4: i64,
}

impl CoordKey {
    /// Key for a coordinate in decimal degrees
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat_e4: (lat * COORD_SCALE).round() as i64,
            lng_e4: (lng * COORD_SCALE).round() as i64,
        }
    }
}

/// A facility with the coordinate its marker should render at
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedFacility {
    /// The underlying record, untouched
    pub facility: Facility,
    /// Marker latitude
    pub offset_lat: f64,
    /// Marker longitude
    pub offset_lng: f64,
}

/// Assign a render coordinate to every facility.
///
/// Facilities alone at their coordinate keep it exactly. Groups of N >= 2
/// coincident facilities are placed evenly around a circle of
/// [`SPREAD_RADIUS_DEG`] centered on the shared coordinate, member i at
/// angle `i * 2 * PI / N` starting due east. Groups come out in
/// first-seen order, members within a group in input order.
pub fn deconflict(facilities: &[Facility]) -> Vec<PositionedFacility> {
    let mut groups: HashMap<CoordKey, Vec<&Facility>> = HashMap::new();
    let mut key_order: Vec<CoordKey> = Vec::new();
    for facility in facilities {
        let key = CoordKey::new(facility.lat, facility.lng);
        let group = groups.entry(key).or_insert_with(|| {
            key_order.push(key);
            Vec::new()
        });
        group.push(facility);
    }

    let mut positioned = Vec::with_capacity(facilities.len());
    for key in key_order {
        let members = &groups[&key];
        if members.len() == 1 {
            let facility = members[0];
            positioned.push(PositionedFacility {
                facility: facility.clone(),
                offset_lat: facility.lat,
                offset_lng: facility.lng,
            });
        } else {
            let step = 2.0 * PI / members.len() as f64;
            for (i, facility) in members.iter().enumerate() {
                let angle = i as f64 * step;
                positioned.push(PositionedFacility {
                    facility: (*facility).clone(),
                    offset_lat: facility.lat + SPREAD_RADIUS_DEG * angle.sin(),
                    offset_lng: facility.lng + SPREAD_RADIUS_DEG * angle.cos(),
                });
            }
        }
    }

    positioned
}

/// How many facilities share each rounded coordinate
#[derive(Debug, Clone, Default)]
pub struct CollocationIndex {
    counts: HashMap<CoordKey, usize>,
}

impl CollocationIndex {
    /// Facilities sharing the rounded coordinate, 0 when none
    pub fn count_at(&self, lat: f64, lng: f64) -> usize {
        self.counts
            .get(&CoordKey::new(lat, lng))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct occupied coordinates
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no facilities were indexed
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count facilities per rounded coordinate, for campus badges
pub fn build_collocation_index(facilities: &[Facility]) -> CollocationIndex {
    let mut counts: HashMap<CoordKey, usize> = HashMap::with_capacity(facilities.len());
    for facility in facilities {
        *counts
            .entry(CoordKey::new(facility.lat, facility.lng))
            .or_insert(0) += 1;
    }
    CollocationIndex { counts }
}
