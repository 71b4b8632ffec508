//! Current weather conditions client.
//!
//! Companion to the exploration flow: the mission screen shows the
//! conditions at the user's position alongside the point list. The
//! backend resolves the coordinate to a forecast-grid cell and a
//! human-readable location name.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Coordinate;

/// Default HTTP timeout for weather requests.
pub const DEFAULT_WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from fetching weather conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    /// The HTTP request failed or returned a non-success status.
    #[error("weather request failed: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("weather response decode failed: {0}")]
    Decode(String),
}

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL of the backend API, without trailing slash.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: crate::search::DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_WEATHER_TIMEOUT,
        }
    }
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Short condition label, e.g. "맑음".
    #[serde(rename = "weather_condition")]
    pub condition: String,
    /// Conversational description of the conditions.
    pub description: String,
    /// Human-readable name of the resolved location.
    pub location: String,
    /// Air quality label, when the backend has one.
    #[serde(default)]
    pub air_quality: Option<String>,
}

impl WeatherReport {
    /// The placeholder report shown when conditions cannot be fetched.
    pub fn unavailable() -> Self {
        Self {
            temperature: 20.0,
            condition: "맑음".to_string(),
            description: "날씨 정보를 가져올 수 없습니다".to_string(),
            location: "현재 위치".to_string(),
            air_quality: Some("보통".to_string()),
        }
    }
}

#[derive(Serialize)]
struct WeatherRequestBody {
    latitude: f64,
    longitude: f64,
}

/// HTTP client for the weather endpoint.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a client from configuration.
    pub fn new(config: WeatherConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url,
        }
    }

    /// Fetch current conditions at a coordinate.
    pub async fn current(&self, coordinate: &Coordinate) -> Result<WeatherReport, WeatherError> {
        let body = WeatherRequestBody {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
        };

        let url = format!("{}/weather/current", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Network(format!(
                "weather endpoint returned HTTP {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let report: WeatherReport =
            serde_json::from_slice(&bytes).map_err(|e| WeatherError::Decode(e.to_string()))?;

        tracing::debug!(
            temperature = report.temperature,
            condition = %report.condition,
            location = %report.location,
            "weather report fetched"
        );

        Ok(report)
    }
}
