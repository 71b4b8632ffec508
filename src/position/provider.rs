//! Position provider orchestrating permission, acquisition, and
//! plausibility checking.

use crate::geo::Coordinate;

use super::device::DeviceLocationApi;
use super::error::PositionError;
use super::fix::{FixRequest, PositionFix};
use super::policy::{PlausibilityPolicy, WesternHemisphereImplausible};

/// Resolves the user's current position through a platform location API.
///
/// Each call to [`current_position`](Self::current_position) negotiates
/// permission, acquires a fresh fix honoring the configured
/// [`FixRequest`], and passes it through the plausibility policy. An
/// implausible fix is substituted with the service-area fallback point
/// when fallback is enabled, and the substitution is always visible
/// through [`PositionFix::source`].
pub struct PositionProvider<D, P> {
    device: D,
    policy: P,
    request: FixRequest,
    fallback_enabled: bool,
}

impl<D: DeviceLocationApi> PositionProvider<D, WesternHemisphereImplausible> {
    /// Create a provider with the default plausibility policy.
    pub fn new(device: D) -> Self {
        Self::with_policy(device, WesternHemisphereImplausible)
    }
}

impl<D: DeviceLocationApi, P: PlausibilityPolicy> PositionProvider<D, P> {
    /// Create a provider with a custom plausibility policy.
    pub fn with_policy(device: D, policy: P) -> Self {
        Self {
            device,
            policy,
            request: FixRequest::default(),
            fallback_enabled: true,
        }
    }

    /// Override the acquisition options.
    pub fn with_request(mut self, request: FixRequest) -> Self {
        self.request = request;
        self
    }

    /// Enable or disable fallback substitution for implausible fixes.
    ///
    /// When disabled, an implausible device fix is returned unchanged.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    /// Resolve the current position.
    ///
    /// # Errors
    ///
    /// * [`PositionError::PermissionDenied`] when the platform refuses
    ///   location access.
    /// * [`PositionError::Unavailable`] when the platform cannot produce
    ///   a usable fix.
    /// * [`PositionError::Timeout`] when no fix arrives in time.
    ///
    /// Fallback substitution applies only to implausible *successful*
    /// fixes; device failures are never papered over.
    pub async fn current_position(&self) -> Result<PositionFix, PositionError> {
        if !self.device.request_permission().await {
            tracing::warn!("location permission denied by platform");
            return Err(PositionError::PermissionDenied);
        }

        let raw = self.device.acquire_fix(&self.request).await?;

        let coordinate = Coordinate::new(raw.latitude, raw.longitude)
            .map_err(|e| PositionError::Unavailable(e.to_string()))?;
        let fix = PositionFix::from_device(coordinate, raw.accuracy_m);

        if self.policy.is_plausible(&coordinate) {
            tracing::debug!(
                latitude = coordinate.latitude(),
                longitude = coordinate.longitude(),
                accuracy_m = raw.accuracy_m,
                "device fix accepted"
            );
            return Ok(fix);
        }

        if self.fallback_enabled {
            let fallback = PositionFix::fallback_default();
            tracing::warn!(
                device_latitude = coordinate.latitude(),
                device_longitude = coordinate.longitude(),
                fallback_latitude = fallback.coordinate.latitude(),
                fallback_longitude = fallback.coordinate.longitude(),
                "implausible device fix, substituting fallback position"
            );
            Ok(fallback)
        } else {
            tracing::warn!(
                latitude = coordinate.latitude(),
                longitude = coordinate.longitude(),
                "implausible device fix kept (fallback disabled)"
            );
            Ok(fix)
        }
    }
}
