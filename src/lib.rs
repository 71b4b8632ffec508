//! Exploration Engine - location discovery and arrival verification
//!
//! This library provides the core functionality for neighborhood exploration
//! missions: acquiring the user's current position, discovering nearby
//! points of interest around it, and verifying arrival at a mission target.
//!
//! # High-Level API
//!
//! Most embedders drive everything through an [`session::ExplorationSession`]:
//!
//! ```ignore
//! use exploration_engine::position::{PositionProvider, WesternHemisphereImplausible};
//! use exploration_engine::search::{HttpSearchClient, SearchConfig};
//! use exploration_engine::session::{ExplorationSession, SessionConfig, Target};
//!
//! let provider = PositionProvider::new(platform_location_api);
//! let client = HttpSearchClient::new(SearchConfig::default());
//! let session = ExplorationSession::new(provider, client, SessionConfig::default());
//!
//! session.start(target).await?;
//! let result = session.verify_arrival().await?;
//! ```

pub mod arrival;
pub mod geo;
pub mod logging;
pub mod merge;
pub mod position;
pub mod search;
pub mod session;
pub mod weather;

/// Version of the exploration engine library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
