//! Core geographic types and validation bounds.

use thiserror::Error;

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;

/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Errors from constructing geographic coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude out of valid range (-90 to 90 degrees).
    #[error("invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    /// Longitude out of valid range (-180 to 180 degrees).
    #[error("invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),
}

/// A validated geographic coordinate in decimal degrees.
///
/// Construction through [`Coordinate::new`] guarantees both components
/// are within valid range, so downstream distance math never has to
/// re-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let coord = Coordinate::new(35.2722, 128.4061).unwrap();
        assert!((coord.latitude() - 35.2722).abs() < f64::EPSILON);
        assert!((coord.longitude() - 128.4061).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        let result = Coordinate::new(90.0001, 0.0);
        assert!(matches!(result, Err(GeoError::InvalidLatitude(_))));

        let result = Coordinate::new(-91.0, 0.0);
        assert!(matches!(result, Err(GeoError::InvalidLatitude(_))));
    }

    #[test]
    fn test_invalid_longitude() {
        let result = Coordinate::new(0.0, 180.0001);
        assert!(matches!(result, Err(GeoError::InvalidLongitude(_))));

        let result = Coordinate::new(0.0, -181.0);
        assert!(matches!(result, Err(GeoError::InvalidLongitude(_))));
    }

    #[test]
    fn test_display_format() {
        let coord = Coordinate::new(35.2722, 128.4061).unwrap();
        assert_eq!(format!("{}", coord), "35.2722°, 128.4061°");
    }

    #[test]
    fn test_error_messages() {
        let err = Coordinate::new(95.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("95"));

        let err = Coordinate::new(0.0, -200.0).unwrap_err();
        assert!(err.to_string().contains("-200"));
    }
}
