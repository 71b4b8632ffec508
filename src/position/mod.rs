//! Current-position acquisition.
//!
//! This module resolves the user's position through a platform-provided
//! location facility and guards against implausible fixes.
//!
//! # Design
//!
//! Three pieces cooperate:
//!
//! - [`DeviceLocationApi`] is the seam to the platform. Embedders
//!   implement it over their GPS stack; tests script it.
//! - [`PlausibilityPolicy`] decides whether a fix can be a genuine user
//!   position. The default [`WesternHemisphereImplausible`] policy
//!   rejects the stock simulator position (negative longitude).
//! - [`PositionProvider`] runs the flow: permission, acquisition with
//!   timeout and staleness bounds, plausibility check, and fallback
//!   substitution with the source recorded on the resulting
//!   [`PositionFix`].
//!
//! # Usage
//!
//! ```ignore
//! use exploration_engine::position::PositionProvider;
//!
//! let provider = PositionProvider::new(platform_api);
//! let fix = provider.current_position().await?;
//! println!("{} ({})", fix.coordinate, fix.source);
//! ```

mod device;
mod error;
mod fix;
mod policy;
mod provider;

pub use device::{DeviceFix, DeviceLocationApi};
pub use error::PositionError;
pub use fix::{
    fallback_coordinate, FixRequest, PositionFix, PositionSource, DEFAULT_FIX_TIMEOUT,
    DEFAULT_MAX_STALENESS, FALLBACK_ACCURACY_M, FALLBACK_LATITUDE, FALLBACK_LONGITUDE,
};
pub use policy::{AlwaysPlausible, PlausibilityPolicy, WesternHemisphereImplausible};
pub use provider::PositionProvider;
