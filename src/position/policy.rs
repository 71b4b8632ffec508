//! Fix plausibility policies.

use crate::geo::Coordinate;

/// Judges whether a successfully acquired device fix is geographically
/// plausible for the service area.
///
/// Implausible fixes are substituted with the fallback reference point
/// when fallback is enabled on the provider.
pub trait PlausibilityPolicy: Send + Sync {
    /// Whether the coordinate looks like a genuine user position.
    fn is_plausible(&self, coordinate: &Coordinate) -> bool;
}

/// Default policy: western-hemisphere fixes are implausible.
///
/// Desktop simulators and emulators report a stock position with a
/// negative longitude when no real GPS source is attached. The service
/// area lies entirely in the eastern hemisphere, so such a fix cannot
/// be a genuine user position.
#[derive(Debug, Clone, Copy, Default)]
pub struct WesternHemisphereImplausible;

impl PlausibilityPolicy for WesternHemisphereImplausible {
    fn is_plausible(&self, coordinate: &Coordinate) -> bool {
        coordinate.longitude() >= 0.0
    }
}

/// Policy that accepts every fix. Useful for embedders operating
/// outside the default service area.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPlausible;

impl PlausibilityPolicy for AlwaysPlausible {
    fn is_plausible(&self, _coordinate: &Coordinate) -> bool {
        true
    }
}
