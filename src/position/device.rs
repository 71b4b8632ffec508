//! Platform location API seam.
//!
//! The [`DeviceLocationApi`] trait abstracts over whatever positioning
//! facility the embedding platform provides (mobile GPS, desktop
//! geolocation service, test doubles). The engine never talks to the
//! platform directly.

use std::future::Future;

use super::error::PositionError;
use super::fix::FixRequest;

/// A raw fix as reported by the platform, before validation.
#[derive(Debug, Clone, Copy)]
pub struct DeviceFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported horizontal accuracy in metres.
    pub accuracy_m: f32,
}

/// Trait for platform location facilities.
///
/// Implementations negotiate permission and produce single position
/// fixes honoring the request options.
pub trait DeviceLocationApi: Send + Sync {
    /// Ask the platform for location permission.
    ///
    /// Returns `true` when permission is granted. Platform failures
    /// during negotiation count as denial.
    fn request_permission(&self) -> impl Future<Output = bool> + Send;

    /// Acquire a single fix honoring the request options.
    fn acquire_fix(
        &self,
        request: &FixRequest,
    ) -> impl Future<Output = Result<DeviceFix, PositionError>> + Send;
}

impl<T: DeviceLocationApi> DeviceLocationApi for std::sync::Arc<T> {
    fn request_permission(&self) -> impl Future<Output = bool> + Send {
        self.as_ref().request_permission()
    }

    fn acquire_fix(
        &self,
        request: &FixRequest,
    ) -> impl Future<Output = Result<DeviceFix, PositionError>> + Send {
        self.as_ref().acquire_fix(request)
    }
}
