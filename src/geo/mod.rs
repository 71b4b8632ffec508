//! Geodesic calculation module
//!
//! Provides great-circle distance math between geographic coordinates
//! and the inclusive radius check used for arrival decisions.

mod types;

pub use types::{Coordinate, GeoError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates.
///
/// Uses the haversine formula over a spherical Earth model.
///
/// # Arguments
///
/// * `a` - First coordinate
/// * `b` - Second coordinate
///
/// # Returns
///
/// Distance in kilometres. Symmetric in its arguments and zero for
/// identical inputs.
#[inline]
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Checks whether `b` lies within `radius_m` metres of `a`.
///
/// The boundary is inclusive: a point at exactly `radius_m` metres
/// counts as inside.
#[inline]
pub fn is_within_radius(a: &Coordinate, b: &Coordinate, radius_m: f64) -> bool {
    distance_km(a, b) * 1000.0 <= radius_m
}
