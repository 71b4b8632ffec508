//! Position fix representation.

use std::time::{Duration, Instant};

use crate::geo::Coordinate;

/// Default timeout for a single fix acquisition.
pub const DEFAULT_FIX_TIMEOUT: Duration = Duration::from_secs(15);

/// Default maximum age of a cached platform fix.
pub const DEFAULT_MAX_STALENESS: Duration = Duration::from_secs(10);

/// Latitude of the service-area reference point used when a device fix
/// is implausible.
pub const FALLBACK_LATITUDE: f64 = 35.2722;

/// Longitude of the service-area reference point.
pub const FALLBACK_LONGITUDE: f64 = 128.4061;

/// Nominal accuracy assigned to the fallback position.
pub const FALLBACK_ACCURACY_M: f32 = 100.0;

/// Where a position fix came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSource {
    /// Reported by the platform location API.
    Device,
    /// Substituted service-area reference point.
    FallbackDefault,
}

impl std::fmt::Display for PositionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Device => write!(f, "Device"),
            Self::FallbackDefault => write!(f, "Fallback Default"),
        }
    }
}

/// Options for a single position acquisition.
#[derive(Debug, Clone, Copy)]
pub struct FixRequest {
    /// Request the highest accuracy the platform offers.
    pub high_accuracy: bool,
    /// How long to wait for a fix before giving up.
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix.
    pub max_staleness: Duration,
}

impl Default for FixRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_FIX_TIMEOUT,
            max_staleness: DEFAULT_MAX_STALENESS,
        }
    }
}

/// The service-area reference coordinate.
///
/// Used both as the implausible-fix substitute and as the location of
/// the degraded-session exploration point.
pub fn fallback_coordinate() -> Coordinate {
    Coordinate::new(FALLBACK_LATITUDE, FALLBACK_LONGITUDE)
        .expect("fallback coordinate constants are within valid range")
}

/// A resolved position with provenance.
#[derive(Debug, Clone, Copy)]
pub struct PositionFix {
    /// The resolved coordinate.
    pub coordinate: Coordinate,
    /// Reported horizontal accuracy in metres.
    pub accuracy_m: f32,
    /// Where this fix came from.
    pub source: PositionSource,
    /// When this fix was resolved.
    pub acquired_at: Instant,
}

impl PositionFix {
    /// Create a fix from a platform report.
    pub fn from_device(coordinate: Coordinate, accuracy_m: f32) -> Self {
        Self {
            coordinate,
            accuracy_m,
            source: PositionSource::Device,
            acquired_at: Instant::now(),
        }
    }

    /// Create the substituted service-area fix.
    pub fn fallback_default() -> Self {
        Self {
            coordinate: fallback_coordinate(),
            accuracy_m: FALLBACK_ACCURACY_M,
            source: PositionSource::FallbackDefault,
            acquired_at: Instant::now(),
        }
    }

    /// Time since this fix was resolved.
    pub fn age(&self) -> Duration {
        self.acquired_at.elapsed()
    }

    /// Whether this fix is older than `max_age`.
    pub fn is_stale(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }
}
