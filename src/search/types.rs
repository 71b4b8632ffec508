//! Search domain types.

use crate::geo::Coordinate;

use super::error::SearchError;

/// A point of interest returned by discovery operations.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPoint {
    /// Stable identifier. Catalog rows carry numeric ids rendered as
    /// strings; synthetic points use reserved ids like `"target"`.
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub category_id: Option<u32>,
    pub category_name: Option<String>,
    pub coordinate: Coordinate,
    /// Distance from the search center, when the backend computed one.
    pub distance_km: Option<f64>,
    /// Whether this point is the mission target.
    pub is_target: bool,
}

/// A location category from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
}

/// Parameters for a nearby search.
#[derive(Debug, Clone, Copy)]
pub struct NearbyQuery {
    /// Center of the search area.
    pub center: Coordinate,
    /// Search radius in kilometres.
    pub radius_km: f64,
    /// Maximum number of results.
    pub limit: u32,
}

impl NearbyQuery {
    /// Validate query parameters.
    ///
    /// Runs before any network activity so malformed queries never
    /// reach the wire.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.radius_km <= 0.0 {
            return Err(SearchError::InvalidQuery(format!(
                "radius_km must be positive, got {}",
                self.radius_km
            )));
        }
        if self.limit == 0 {
            return Err(SearchError::InvalidQuery(
                "limit must be positive, got 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Filter parameters for catalog listing.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Rows to skip (pagination offset).
    pub skip: u32,
    /// Maximum rows to return. Zero means backend default.
    pub limit: u32,
    /// Restrict to a category.
    pub category_id: Option<u32>,
    /// Free-text name/address filter.
    pub search: Option<String>,
}
