//! FRED REST transport.
//!
//! One GET per call against `{base_url}/{endpoint}`, with `api_key` and
//! `file_type=json` appended to every query string. There is no retry and no
//! timeout beyond reqwest's defaults; faults are logged and handed back to the
//! caller unchanged.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::{missing_api_key, FredSettings};
use crate::error::{ClientError, ClientResult};
use crate::query::{
    CategoryQuery, EndpointQuery, ObservationsQuery, QueryParams, ReleaseDatesQuery,
    ReleaseQuery, ReleaseSeriesQuery, ReleasesQuery, SeriesQuery, SeriesSearchQuery,
};

/// Output format flag sent with every request.
const FILE_TYPE: &str = "json";

/// HTTP client bound to one provider base address and API key.
///
/// Not `Clone`: share it behind an `Arc` or a once-cell so the connection pool
/// is released exactly once, by [`FredClient::shutdown`] or by drop.
#[derive(Debug)]
pub struct FredClient {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl FredClient {
    /// Build a client. Fails before any network activity if the key is blank.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> ClientResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(missing_api_key());
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Creating FRED client");

        Ok(Self {
            http: reqwest::Client::new(),
            api_key: SecretString::from(api_key),
            base_url,
        })
    }

    pub fn from_settings(settings: &FredSettings) -> ClientResult<Self> {
        let key = settings.require_api_key()?;
        Self::new(key, settings.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `endpoint` and decode the body as JSON.
    ///
    /// `params` are sent first, followed by the credentials and format flag.
    pub async fn request(&self, endpoint: &str, params: QueryParams) -> ClientResult<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("api_key", self.api_key.expose_secret()));
        query.push(("file_type", FILE_TYPE));

        debug!(endpoint, param_count = params.len(), "Sending FRED request");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| transport_failure(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(endpoint, response.text().await);
            error!(
                endpoint,
                status = status.as_u16(),
                body = %body,
                "HTTP error occurred"
            );
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_failure(endpoint, e))?;

        serde_json::from_str(&body).map_err(|e| {
            error!(endpoint, error = %e, "FRED response body is not valid JSON");
            ClientError::SerializationError(e)
        })
    }

    /// Validate a typed query and send it to its endpoint.
    pub async fn fetch<Q: EndpointQuery>(&self, query: &Q) -> ClientResult<Value> {
        query.validate()?;
        self.request(Q::ENDPOINT, query.to_params()).await
    }

    /// Observations for one series (`series/observations`).
    pub async fn get_series_observations(&self, query: &ObservationsQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// Full-text series search (`series/search`).
    pub async fn search_series(&self, query: &SeriesSearchQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// Series metadata (`series`).
    pub async fn get_series(&self, query: &SeriesQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// Root category, or one category by id (`category` in both cases).
    pub async fn get_categories(&self, query: &CategoryQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// All releases (`releases`).
    pub async fn get_releases(&self, query: &ReleasesQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// One release by id (`release`).
    pub async fn get_release(&self, query: &ReleaseQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// Series published under a release (`release/series`).
    pub async fn get_release_series(&self, query: &ReleaseSeriesQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// Publication dates of a release (`release/dates`).
    pub async fn get_release_dates(&self, query: &ReleaseDatesQuery) -> ClientResult<Value> {
        self.fetch(query).await
    }

    /// Release the connection pool.
    pub fn shutdown(self) {
        debug!(base_url = %self.base_url, "Shutting down FRED client");
        drop(self.http);
    }
}

/// Body of a non-2xx response, or a marker when it could not be read.
fn error_body<E: std::fmt::Display>(endpoint: &str, read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| {
        warn!(endpoint, error = %e, "Could not read FRED error response body");
        format!("<body unavailable: {e}>")
    })
}

/// Log a network-level fault and wrap it. The URL is stripped because it
/// carries the API key in its query string.
fn transport_failure(endpoint: &str, err: reqwest::Error) -> ClientError {
    let err = err.without_url();
    error!(endpoint, error = %err, "HTTP error occurred");
    ClientError::HttpError(err)
}
