//! Great-circle distance between airport coordinates.
//!
//! Both helpers truncate toward zero rather than rounding, so a route is never
//! reported longer than it is.

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres to nautical miles.
pub const KM_TO_NM: f64 = 0.5399565;

/// Haversine distance in whole kilometres between two latitude/longitude pairs
/// given in degrees.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + sin_dlon * sin_dlon * lat1.cos() * lat2.cos();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    (EARTH_RADIUS_KM * c) as i64
}

/// Convert whole kilometres to whole nautical miles.
pub fn km_to_nautical_miles(km: i64) -> i64 {
    (km as f64 * KM_TO_NM) as i64
}
