// crates/revgeo-core/src/distance.rs

//! Great-circle distance on a spherical Earth.

use std::f64::consts::PI;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in degrees.
///
/// The degree-to-radian conversion is `deg * PI / 180` (multiply, then
/// divide) rather than `f64::to_radians`, which rounds differently in the
/// last bit. Keeping this order makes results reproducible across
/// implementations.
///
/// # Example
///
/// ```
/// use revgeo_core::distance::haversine_km;
///
/// // London to Paris is roughly 344 km.
/// let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
/// assert!((d - 343.5).abs() < 1.0);
/// ```
#[inline]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1) * PI / 180.0;
    let d_lon = (lon2 - lon1) * PI / 180.0;
    let lat1_rad = lat1 * PI / 180.0;
    let lat2_rad = lat2 * PI / 180.0;

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + (d_lon / 2.0).sin() * (d_lon / 2.0).sin() * lat1_rad.cos() * lat2_rad.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
