//! Proximity search and location catalog access.
//!
//! # Design
//!
//! The session depends only on the [`NearbySearchClient`] trait so that
//! tests and alternative backends can stand in for the REST API. The
//! [`HttpSearchClient`] implementation validates queries before any
//! network activity, posts to `/locations/nearby`, and decodes rows
//! into [`LocationPoint`] values with validated coordinates.
//!
//! Catalog browsing (listing, lookup by id, categories) is exposed as
//! inherent methods on [`HttpSearchClient`]; only nearby discovery sits
//! behind the trait seam.

mod client;
mod config;
mod error;
mod types;

pub use client::{HttpSearchClient, NearbySearchClient};
pub use config::{SearchConfig, DEFAULT_BASE_URL, DEFAULT_SEARCH_TIMEOUT};
pub use error::SearchError;
pub use types::{CatalogFilter, Category, LocationPoint, NearbyQuery};
