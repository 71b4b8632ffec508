//! Search client trait and HTTP implementation.
//!
//! The [`NearbySearchClient`] trait abstracts over the discovery
//! backend, allowing the session to work with any source of nearby
//! points. The [`HttpSearchClient`] implementation talks to the
//! location REST API via `reqwest`.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

use super::config::SearchConfig;
use super::error::SearchError;
use super::types::{CatalogFilter, Category, LocationPoint, NearbyQuery};

/// Trait for discovering points of interest near a coordinate.
pub trait NearbySearchClient: Send + Sync {
    /// Search for locations near the query center.
    ///
    /// Implementations validate the query before doing any I/O and do
    /// not retry internally; retry policy belongs to the caller.
    fn search_nearby(
        &self,
        query: &NearbyQuery,
    ) -> impl Future<Output = Result<Vec<LocationPoint>, SearchError>> + Send;
}

impl<T: NearbySearchClient> NearbySearchClient for std::sync::Arc<T> {
    fn search_nearby(
        &self,
        query: &NearbyQuery,
    ) -> impl Future<Output = Result<Vec<LocationPoint>, SearchError>> + Send {
        self.as_ref().search_nearby(query)
    }
}

/// Request body for the nearby endpoint.
#[derive(Serialize)]
struct NearbyRequestBody {
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    limit: u32,
}

/// Coordinate pair as the backend serializes it.
#[derive(Deserialize)]
struct WireCoordinates {
    latitude: f64,
    longitude: f64,
}

/// One location row from the backend.
///
/// This is our own type, decoupled from the backend's ORM models.
/// Unknown fields are ignored.
#[derive(Deserialize)]
struct LocationRow {
    id: u64,
    name: String,
    address: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    category_id: Option<u32>,
    #[serde(default)]
    category_name: Option<String>,
    coordinates: WireCoordinates,
    #[serde(default)]
    distance_km: Option<f64>,
}

impl LocationRow {
    fn into_point(self) -> Result<LocationPoint, SearchError> {
        let coordinate = Coordinate::new(self.coordinates.latitude, self.coordinates.longitude)
            .map_err(|e| {
                SearchError::Decode(format!("location {} has invalid coordinates: {}", self.id, e))
            })?;

        Ok(LocationPoint {
            id: self.id.to_string(),
            name: self.name,
            address: self.address,
            phone: self.phone,
            category_id: self.category_id,
            category_name: self.category_name,
            coordinate,
            distance_km: self.distance_km,
            is_target: false,
        })
    }
}

/// One category row from the backend.
#[derive(Deserialize)]
struct CategoryRow {
    id: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

/// HTTP client for the location REST API.
///
/// Uses a reusable `reqwest::Client` with connection pooling and the
/// configured timeout baked in.
pub struct HttpSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSearchClient {
    /// Create a client from configuration.
    pub fn new(config: SearchConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url,
        }
    }

    async fn read_rows(response: reqwest::Response) -> Result<Vec<LocationRow>, SearchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!(
                "backend returned HTTP {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| SearchError::Decode(e.to_string()))
    }

    /// List catalog locations with optional filtering.
    pub async fn list_locations(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<LocationPoint>, SearchError> {
        let url = format!("{}/locations/", self.base_url);
        let mut request = self.http.get(&url).query(&[("skip", filter.skip)]);

        if filter.limit > 0 {
            request = request.query(&[("limit", filter.limit)]);
        }
        if let Some(category_id) = filter.category_id {
            request = request.query(&[("category_id", category_id)]);
        }
        if let Some(ref search) = filter.search {
            request = request.query(&[("search", search)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let rows = Self::read_rows(response).await?;
        tracing::debug!(rows = rows.len(), "catalog listing fetched");

        rows.into_iter().map(LocationRow::into_point).collect()
    }

    /// Fetch a single catalog location by id.
    pub async fn get_location(&self, id: u64) -> Result<LocationPoint, SearchError> {
        let url = format!("{}/locations/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!(
                "location {} fetch returned HTTP {}",
                id, status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let row: LocationRow =
            serde_json::from_slice(&bytes).map_err(|e| SearchError::Decode(e.to_string()))?;
        row.into_point()
    }

    /// List all location categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, SearchError> {
        let url = format!("{}/locations/categories/", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!(
                "category listing returned HTTP {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let rows: Vec<CategoryRow> =
            serde_json::from_slice(&bytes).map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| Category {
                id: row.id,
                name: row.name,
                description: row.description,
            })
            .collect())
    }
}

impl NearbySearchClient for HttpSearchClient {
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<Vec<LocationPoint>, SearchError> {
        query.validate()?;

        let body = NearbyRequestBody {
            latitude: query.center.latitude(),
            longitude: query.center.longitude(),
            radius_km: query.radius_km,
            limit: query.limit,
        };

        let url = format!("{}/locations/nearby", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let rows = Self::read_rows(response).await?;

        tracing::debug!(
            rows = rows.len(),
            radius_km = query.radius_km,
            limit = query.limit,
            "nearby search completed"
        );

        rows.into_iter().map(LocationRow::into_point).collect()
    }
}
