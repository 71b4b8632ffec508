//! Arrival verification.
//!
//! Decides whether a position counts as having arrived at a target,
//! using an inclusive completion radius around the target coordinate.

use crate::geo::{self, Coordinate};

/// Default completion radius in metres.
pub const DEFAULT_COMPLETION_RADIUS_M: f64 = 50.0;

/// A configured arrival check against a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalCheck {
    target: Coordinate,
    completion_radius_m: f64,
}

/// Outcome of an arrival verification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalResult {
    /// Whether the position is within the completion radius.
    pub arrived: bool,
    /// Distance from the position to the target in metres.
    pub distance_m: f64,
    /// Distance still to cover before arrival, zero once inside.
    pub remaining_m: f64,
}

impl ArrivalCheck {
    /// Create a check with the default completion radius.
    pub fn new(target: Coordinate) -> Self {
        Self::with_radius(target, DEFAULT_COMPLETION_RADIUS_M)
    }

    /// Create a check with a custom completion radius in metres.
    pub fn with_radius(target: Coordinate, completion_radius_m: f64) -> Self {
        Self {
            target,
            completion_radius_m,
        }
    }

    /// The target coordinate this check verifies against.
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Verify a position against the target.
    ///
    /// The boundary is inclusive: a position at exactly the completion
    /// radius counts as arrived.
    pub fn verify(&self, position: &Coordinate) -> ArrivalResult {
        let distance_m = geo::distance_km(position, &self.target) * 1000.0;
        let arrived = distance_m <= self.completion_radius_m;
        let remaining_m = (distance_m - self.completion_radius_m).max(0.0);

        ArrivalResult {
            arrived,
            distance_m,
            remaining_m,
        }
    }
}
