//! Haversine great-circle distance

use atlas_common::Facility;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers to statute miles
const MILES_PER_KM: f64 = 0.621371;

/// Great-circle distance in kilometers between two coordinates given in
/// decimal degrees.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Convert kilometers to statute miles
pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

/// Facility closest to the given coordinate, or `None` for an empty slice.
/// Ties keep the earlier record.
pub fn nearest_facility<'a>(facilities: &'a [Facility], lat: f64, lng: f64) -> Option<&'a Facility> {
    facilities.iter().min_by(|a, b| {
        let da = distance_km(lat, lng, a.lat, a.lng);
        let db = distance_km(lat, lng, b.lat, b.lng);
        da.partial_cmp(&db).unwrap()
    })
}
