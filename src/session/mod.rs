//! Exploration session orchestration.
//!
//! # Design
//!
//! An [`ExplorationSession`] ties the position, search, merge, and
//! arrival pieces together behind a small state machine:
//!
//! ```text
//! Idle → ResolvingCenter → SearchingNearby → Ready → Verifying → Arrived
//!                                              ↑                    ↓
//!                                              └──── NotYetArrived ←┘
//! ```
//!
//! A failed search never strands the mission: after the configured
//! retries the session becomes `Ready { degraded: true }` with a single
//! hardcoded exploration point. Arrival verification acquires a fresh
//! position on every call and may be repeated indefinitely.
//!
//! # Usage
//!
//! ```ignore
//! use exploration_engine::session::{ExplorationSession, SessionConfig, Target};
//!
//! let session = ExplorationSession::new(provider, client, SessionConfig::default());
//! session.start(target).await?;
//!
//! let result = session.verify_arrival().await?;
//! if result.arrived {
//!     println!("mission complete");
//! } else {
//!     println!("{:.0} m to go", result.remaining_m);
//! }
//! ```

mod config;
mod error;
mod exploration;
mod state;

pub use config::{
    SessionConfig, DEFAULT_LIMIT, DEFAULT_RADIUS_KM, DEFAULT_RETRY_DELAY, DEFAULT_SEARCH_RETRIES,
};
pub use error::SessionError;
pub use exploration::{ExplorationSession, Target};
pub use state::SessionState;
