//! Weather summary sources
//!
//! The dashboard only needs one thing from the outside world: a list of
//! city/temperature records, fetched once on mount. Each source below
//! produces that list from a different place.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::SourceConfig;
use crate::state::WeatherRecord;

pub const OPEN_METEO_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1";
pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1";

/// Errors while loading the summary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { status: u16, url: String },

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected summary format: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("city not found: {0}")]
    CityNotFound(String),
}

/// Anything that can produce the weather summary
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch all records, in the order the source reports them
    async fn fetch_summary(&self) -> Result<Vec<WeatherRecord>, LoadError>;

    /// Short description for the dashboard header
    fn describe(&self) -> String;
}

/// Build the source selected by configuration
pub fn source_from_config(
    config: &SourceConfig,
    timeout: Duration,
) -> Result<Arc<dyn WeatherSource>, LoadError> {
    let source: Arc<dyn WeatherSource> = match config {
        SourceConfig::Endpoint { url } => Arc::new(EndpointSource::new(url.clone(), timeout)?),
        SourceConfig::OpenMeteo { cities } => {
            Arc::new(OpenMeteoSource::new(cities.clone(), timeout)?)
        }
        SourceConfig::File { path } => Arc::new(FileSource::new(path.clone())),
    };
    Ok(source)
}

fn http_client(timeout: Duration) -> Result<Client, LoadError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Drop records that cannot be shown (blank city names)
pub fn sanitize_records(records: Vec<WeatherRecord>) -> Vec<WeatherRecord> {
    records
        .into_iter()
        .filter(|record| {
            let keep = !record.city.trim().is_empty();
            if !keep {
                warn!(temperature = record.temperature, "Dropping record without a city");
            }
            keep
        })
        .collect()
}

fn decode_summary(bytes: &[u8]) -> Result<Vec<WeatherRecord>, LoadError> {
    let records: Vec<WeatherRecord> = serde_json::from_slice(bytes)?;
    Ok(sanitize_records(records))
}

// ============================================================================
// Summary endpoint
// ============================================================================

/// A service that answers GET with `[{"city": ..., "temperature": ...}, ...]`
#[derive(Debug)]
pub struct EndpointSource {
    client: Client,
    url: String,
}

impl EndpointSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WeatherSource for EndpointSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_summary(&self) -> Result<Vec<WeatherRecord>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Summary received");
        decode_summary(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ============================================================================
// Open-Meteo
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

/// Builds the summary from Open-Meteo: geocode each city, then read its
/// current temperature. Cities are queried in list order.
#[derive(Debug)]
pub struct OpenMeteoSource {
    client: Client,
    cities: Vec<String>,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoSource {
    pub fn new(cities: Vec<String>, timeout: Duration) -> Result<Self, LoadError> {
        Ok(Self {
            client: http_client(timeout)?,
            cities,
            geocoding_url: OPEN_METEO_GEOCODING_URL.to_string(),
            forecast_url: OPEN_METEO_FORECAST_URL.to_string(),
        })
    }

    /// Point both APIs somewhere else (mirrors, tests)
    pub fn with_base_urls(
        mut self,
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        self.geocoding_url = geocoding_url.into();
        self.forecast_url = forecast_url.into();
        self
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, LoadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn geocode(&self, city: &str) -> Result<GeocodingResult, LoadError> {
        let url = format!(
            "{}/search?name={}&count=1&language=en",
            self.geocoding_url,
            urlencoding::encode(city)
        );
        let data: GeocodingResponse = self.get_json(&url).await?;
        data.results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| LoadError::CityNotFound(city.to_string()))
    }

    async fn current_temperature(&self, lat: f64, lon: f64) -> Result<f64, LoadError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true",
            self.forecast_url, lat, lon
        );
        let data: ForecastResponse = self.get_json(&url).await?;
        Ok(data.current_weather.temperature)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    #[instrument(skip(self), fields(cities = self.cities.len()))]
    async fn fetch_summary(&self) -> Result<Vec<WeatherRecord>, LoadError> {
        let mut records = Vec::with_capacity(self.cities.len());
        for city in &self.cities {
            let place = self.geocode(city).await?;
            let temperature = self
                .current_temperature(place.latitude, place.longitude)
                .await?;
            debug!(city = %place.name, temperature, "City temperature received");
            records.push(WeatherRecord::new(place.name, temperature));
        }
        Ok(sanitize_records(records))
    }

    fn describe(&self) -> String {
        format!("Open-Meteo ({} cities)", self.cities.len())
    }
}

// ============================================================================
// Local file
// ============================================================================

/// Reads the same JSON array as [`EndpointSource`] from disk
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WeatherSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_summary(&self) -> Result<Vec<WeatherRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        decode_summary(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
