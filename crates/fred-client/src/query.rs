//! Typed per-endpoint queries.
//!
//! Every provider endpoint the client talks to has one struct here listing the
//! parameters this crate knows how to send. Queries are validated before they
//! are turned into wire parameters, so malformed dates or out-of-range limits
//! never reach the provider.

use chrono::NaiveDate;

use crate::error::{ClientError, ClientResult};

/// Ordered `(key, value)` query-string pairs, minus the credentials the client adds.
pub type QueryParams = Vec<(&'static str, String)>;

/// Date format accepted by the provider for observation and realtime bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const DEFAULT_LIMIT: u32 = 100;

/// Provider maxima for the `limit` parameter.
pub const MAX_OBSERVATIONS_LIMIT: u32 = 100_000;
pub const MAX_LIST_LIMIT: u32 = 1_000;
pub const MAX_RELEASE_DATES_LIMIT: u32 = 10_000;

/// A request against one provider endpoint.
pub trait EndpointQuery {
    /// Path relative to the provider base address.
    const ENDPOINT: &'static str;

    /// Reject the query before anything is sent.
    fn validate(&self) -> ClientResult<()>;

    /// Endpoint-specific query-string pairs.
    fn to_params(&self) -> QueryParams;
}

// ── series/observations ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationsQuery {
    pub series_id: String,
    pub observation_start: Option<String>,
    pub observation_end: Option<String>,
    pub limit: u32,
}

impl ObservationsQuery {
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            observation_start: None,
            observation_end: None,
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_range(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.observation_start = start;
        self.observation_end = end;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl EndpointQuery for ObservationsQuery {
    const ENDPOINT: &'static str = "series/observations";

    fn validate(&self) -> ClientResult<()> {
        require_non_empty("series_id", &self.series_id)?;
        validate_range(
            ("observation_start", self.observation_start.as_deref()),
            ("observation_end", self.observation_end.as_deref()),
        )?;
        validate_limit(self.limit, MAX_OBSERVATIONS_LIMIT)
    }

    fn to_params(&self) -> QueryParams {
        let mut params = vec![("series_id", self.series_id.clone())];
        if let Some(start) = &self.observation_start {
            params.push(("observation_start", start.clone()));
        }
        if let Some(end) = &self.observation_end {
            params.push(("observation_end", end.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}

// ── series/search ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSearchQuery {
    pub search_text: String,
    pub limit: u32,
}

impl SeriesSearchQuery {
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl EndpointQuery for SeriesSearchQuery {
    const ENDPOINT: &'static str = "series/search";

    fn validate(&self) -> ClientResult<()> {
        require_non_empty("search_text", &self.search_text)?;
        validate_limit(self.limit, MAX_LIST_LIMIT)
    }

    fn to_params(&self) -> QueryParams {
        vec![
            ("search_text", self.search_text.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}

// ── series ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesQuery {
    pub series_id: String,
}

impl SeriesQuery {
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
        }
    }
}

impl EndpointQuery for SeriesQuery {
    const ENDPOINT: &'static str = "series";

    fn validate(&self) -> ClientResult<()> {
        require_non_empty("series_id", &self.series_id)
    }

    fn to_params(&self) -> QueryParams {
        vec![("series_id", self.series_id.clone())]
    }
}

// ── category ──

/// Category lookup. The provider picks the root category when no id is sent;
/// both cases use the same path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    pub category_id: Option<u64>,
}

impl CategoryQuery {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn by_id(category_id: u64) -> Self {
        Self {
            category_id: Some(category_id),
        }
    }
}

impl EndpointQuery for CategoryQuery {
    const ENDPOINT: &'static str = "category";

    fn validate(&self) -> ClientResult<()> {
        Ok(())
    }

    fn to_params(&self) -> QueryParams {
        self.category_id
            .map(|id| vec![("category_id", id.to_string())])
            .unwrap_or_default()
    }
}

// ── releases ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleasesQuery {
    pub limit: u32,
}

impl Default for ReleasesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ReleasesQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit }
    }
}

impl EndpointQuery for ReleasesQuery {
    const ENDPOINT: &'static str = "releases";

    fn validate(&self) -> ClientResult<()> {
        validate_limit(self.limit, MAX_LIST_LIMIT)
    }

    fn to_params(&self) -> QueryParams {
        vec![("limit", self.limit.to_string())]
    }
}

// ── release ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub release_id: u64,
}

impl ReleaseQuery {
    pub fn new(release_id: u64) -> Self {
        Self { release_id }
    }
}

impl EndpointQuery for ReleaseQuery {
    const ENDPOINT: &'static str = "release";

    fn validate(&self) -> ClientResult<()> {
        Ok(())
    }

    fn to_params(&self) -> QueryParams {
        vec![("release_id", self.release_id.to_string())]
    }
}

// ── release/series ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseSeriesQuery {
    pub release_id: u64,
    pub limit: u32,
}

impl ReleaseSeriesQuery {
    pub fn new(release_id: u64) -> Self {
        Self {
            release_id,
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl EndpointQuery for ReleaseSeriesQuery {
    const ENDPOINT: &'static str = "release/series";

    fn validate(&self) -> ClientResult<()> {
        validate_limit(self.limit, MAX_LIST_LIMIT)
    }

    fn to_params(&self) -> QueryParams {
        vec![
            ("release_id", self.release_id.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

// ── release/dates ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDatesQuery {
    pub release_id: u64,
    pub realtime_start: Option<String>,
    pub realtime_end: Option<String>,
    pub limit: u32,
}

impl ReleaseDatesQuery {
    pub fn new(release_id: u64) -> Self {
        Self {
            release_id,
            realtime_start: None,
            realtime_end: None,
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_range(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.realtime_start = start;
        self.realtime_end = end;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl EndpointQuery for ReleaseDatesQuery {
    const ENDPOINT: &'static str = "release/dates";

    fn validate(&self) -> ClientResult<()> {
        validate_range(
            ("realtime_start", self.realtime_start.as_deref()),
            ("realtime_end", self.realtime_end.as_deref()),
        )?;
        validate_limit(self.limit, MAX_RELEASE_DATES_LIMIT)
    }

    fn to_params(&self) -> QueryParams {
        let mut params = vec![
            ("release_id", self.release_id.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(start) = &self.realtime_start {
            params.push(("realtime_start", start.clone()));
        }
        if let Some(end) = &self.realtime_end {
            params.push(("realtime_end", end.clone()));
        }
        params
    }
}

// ── validation helpers ──

fn require_non_empty(name: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::invalid_input(format!("{name} must not be empty")));
    }
    Ok(())
}

fn validate_limit(limit: u32, max: u32) -> ClientResult<()> {
    if limit == 0 || limit > max {
        return Err(ClientError::invalid_input(format!(
            "limit must be between 1 and {max}, got {limit}"
        )));
    }
    Ok(())
}

fn parse_date(name: &str, value: &str) -> ClientResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ClientError::invalid_input(format!("{name} must be a YYYY-MM-DD date, got '{value}'"))
    })
}

fn validate_range(start: (&str, Option<&str>), end: (&str, Option<&str>)) -> ClientResult<()> {
    let start_date = start.1.map(|v| parse_date(start.0, v)).transpose()?;
    let end_date = end.1.map(|v| parse_date(end.0, v)).transpose()?;

    if let (Some(s), Some(e)) = (start_date, end_date) {
        if s > e {
            return Err(ClientError::invalid_input(format!(
                "{} ({s}) is after {} ({e})",
                start.0, end.0
            )));
        }
    }
    Ok(())
}
