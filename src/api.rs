// API client module: a small blocking HTTP client that asks the public
// airport search index for everything inside a bounding box.

use crate::geo::BoundingBox;
use crate::rank::Airport;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Search endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://mikerhodes.cloudant.com/airportdb/_design/view1/_search/geo";

/// Anything that can list the airports inside a box. The HTTP client is
/// the real implementation; tests substitute canned results.
pub trait AirportSource {
    fn airports_in(&self, bbox: &BoundingBox) -> Result<Vec<Airport>, FetchError>;
}

/// Ways a search request can fail. The pipeline reports all of them as
/// an empty result after logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0:#}")]
    Transport(#[from] reqwest::Error),

    #[error("search service answered {0}")]
    Status(StatusCode),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response body: `{"rows": [{"fields": {"lon", "lat", "name"}}]}`.
/// Every level is optional; missing or null values fall back to defaults.
#[derive(Deserialize, Debug, Default)]
pub struct SearchResults {
    #[serde(default)]
    pub rows: Option<Vec<Row>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Row {
    #[serde(default)]
    pub fields: Option<Fields>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Fields {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub name: Option<String>,
}

impl From<Fields> for Airport {
    fn from(fields: Fields) -> Self {
        Airport::new(
            fields.name.unwrap_or_default(),
            fields.lon.unwrap_or_default(),
            fields.lat.unwrap_or_default(),
        )
    }
}

impl SearchResults {
    pub fn into_airports(self) -> Vec<Airport> {
        self.rows
            .unwrap_or_default()
            .into_iter()
            .map(|row| Airport::from(row.fields.unwrap_or_default()))
            .collect()
    }
}

/// Range query understood by the search index.
pub fn lucene_query(bbox: &BoundingBox) -> String {
    format!(
        "lon:[{} TO {}] AND lat:[{} TO {}]",
        bbox.lon_min, bbox.lon_max, bbox.lat_min, bbox.lat_max
    )
}

/// Blocking client bound to one search endpoint.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client for `endpoint`. No request timeout is set: a
    /// silent server keeps the call waiting.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid search endpoint {:?}", endpoint))?;
        let client = Client::builder()
            .user_agent(concat!("airport-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(SearchClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Endpoint with the query attached as the form-encoded `q` parameter.
    pub fn search_url(&self, bbox: &BoundingBox) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", &lucene_query(bbox));
        url
    }

    fn fetch(&self, url: Url) -> Result<Vec<Airport>, FetchError> {
        let res = self.client.get(url).send()?;
        if !res.status().is_success() {
            return Err(FetchError::Status(res.status()));
        }
        let body = res.text()?;
        let results: SearchResults = serde_json::from_str(&body)?;
        Ok(results.into_airports())
    }
}

impl AirportSource for SearchClient {
    fn airports_in(&self, bbox: &BoundingBox) -> Result<Vec<Airport>, FetchError> {
        let url = self.search_url(bbox);
        log::debug!("GET {}", url);

        // Drawn on stderr, hidden automatically when it is not a terminal.
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Searching airports...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.fetch(url);
        spinner.finish_and_clear();

        if let Ok(airports) = &result {
            log::info!("search returned {} rows", airports.len());
        }
        result
    }
}
