//! Session state machine states.

/// Lifecycle state of an exploration session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No mission in progress.
    #[default]
    Idle,
    /// Acquiring the search center position.
    ResolvingCenter,
    /// Querying the backend for nearby points.
    SearchingNearby,
    /// Mission points available for exploration.
    Ready {
        /// Whether the search failed and the point list is the
        /// hardcoded fallback instead of live results.
        degraded: bool,
    },
    /// Acquiring a fresh position for arrival verification.
    Verifying,
    /// Last verification found the user at the target.
    Arrived,
    /// Last verification found the user outside the completion radius.
    NotYetArrived,
}

impl SessionState {
    /// Whether arrival verification may start from this state.
    pub fn can_verify(&self) -> bool {
        matches!(
            self,
            Self::Ready { .. } | Self::Arrived | Self::NotYetArrived
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::ResolvingCenter => write!(f, "Resolving Center"),
            Self::SearchingNearby => write!(f, "Searching Nearby"),
            Self::Ready { degraded: false } => write!(f, "Ready"),
            Self::Ready { degraded: true } => write!(f, "Ready (degraded)"),
            Self::Verifying => write!(f, "Verifying"),
            Self::Arrived => write!(f, "Arrived"),
            Self::NotYetArrived => write!(f, "Not Yet Arrived"),
        }
    }
}
