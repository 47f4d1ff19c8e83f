//! Parameter structs for all MCP tools.

use fred_client::{
    CategoryQuery, ObservationsQuery, ReleaseDatesQuery, ReleaseQuery, ReleaseSeriesQuery,
    ReleasesQuery, SeriesQuery, SeriesSearchQuery, DEFAULT_LIMIT, DEFAULT_SEARCH_LIMIT,
};
use schemars::JsonSchema;
use serde::Deserialize;

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Hosts often send `""` for an optional string they mean to omit.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// An id of `0` counts as omitted.
fn nonzero(id: Option<u64>) -> Option<u64> {
    id.filter(|&id| id != 0)
}

// ── search_economic_data ──

/// Parameters for the `search_economic_data` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchEconomicDataParams {
    #[schemars(description = "Text to search for in series titles and descriptions")]
    pub search_text: String,
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

impl From<SearchEconomicDataParams> for SeriesSearchQuery {
    fn from(p: SearchEconomicDataParams) -> Self {
        SeriesSearchQuery::new(p.search_text).with_limit(p.limit)
    }
}

// ── get_economic_series ──

/// Parameters for the `get_economic_series` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetEconomicSeriesParams {
    #[schemars(description = "FRED series ID (e.g., 'GDP', 'UNRATE', 'CPIAUCSL')")]
    pub series_id: String,
    #[schemars(description = "Start date in YYYY-MM-DD format (optional)")]
    pub start_date: Option<String>,
    #[schemars(description = "End date in YYYY-MM-DD format (optional)")]
    pub end_date: Option<String>,
    #[schemars(description = "Maximum number of observations to return (default: 100)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl From<GetEconomicSeriesParams> for ObservationsQuery {
    fn from(p: GetEconomicSeriesParams) -> Self {
        ObservationsQuery::new(p.series_id)
            .with_range(supplied(p.start_date), supplied(p.end_date))
            .with_limit(p.limit)
    }
}

// ── get_series_info ──

/// Parameters for the `get_series_info` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSeriesInfoParams {
    #[schemars(description = "FRED series ID")]
    pub series_id: String,
}

impl From<GetSeriesInfoParams> for SeriesQuery {
    fn from(p: GetSeriesInfoParams) -> Self {
        SeriesQuery::new(p.series_id)
    }
}

// ── get_categories ──

/// Parameters for the `get_categories` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetCategoriesParams {
    #[schemars(
        description = "Category ID (optional, returns root categories if not specified)"
    )]
    pub category_id: Option<u64>,
}

impl From<GetCategoriesParams> for CategoryQuery {
    fn from(p: GetCategoriesParams) -> Self {
        nonzero(p.category_id).map_or_else(CategoryQuery::root, CategoryQuery::by_id)
    }
}

// ── get_releases ──

/// Parameters for the `get_releases` tool.
///
/// With a non-zero `release_id` the tool returns that release's detail;
/// otherwise it lists releases up to `limit`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetReleasesParams {
    #[schemars(description = "Specific release ID to get detailed information (optional)")]
    pub release_id: Option<u64>,
    #[schemars(description = "Maximum number of releases to return (default: 100)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Which endpoint a `get_releases` call resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasesRequest {
    All(ReleasesQuery),
    One(ReleaseQuery),
}

impl From<GetReleasesParams> for ReleasesRequest {
    fn from(p: GetReleasesParams) -> Self {
        match nonzero(p.release_id) {
            Some(id) => ReleasesRequest::One(ReleaseQuery::new(id)),
            None => ReleasesRequest::All(ReleasesQuery::with_limit(p.limit)),
        }
    }
}

// ── get_release_series ──

/// Parameters for the `get_release_series` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetReleaseSeriesParams {
    #[schemars(description = "Release ID to get series for")]
    pub release_id: u64,
    #[schemars(description = "Maximum number of series to return (default: 100)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl From<GetReleaseSeriesParams> for ReleaseSeriesQuery {
    fn from(p: GetReleaseSeriesParams) -> Self {
        ReleaseSeriesQuery::new(p.release_id).with_limit(p.limit)
    }
}

// ── get_release_dates ──

/// Parameters for the `get_release_dates` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetReleaseDatesParams {
    #[schemars(description = "Release ID to get dates for")]
    pub release_id: u64,
    #[schemars(description = "Maximum number of dates to return (default: 100)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[schemars(description = "Start date for release dates in YYYY-MM-DD format (optional)")]
    pub start_date: Option<String>,
    #[schemars(description = "End date for release dates in YYYY-MM-DD format (optional)")]
    pub end_date: Option<String>,
}

impl From<GetReleaseDatesParams> for ReleaseDatesQuery {
    fn from(p: GetReleaseDatesParams) -> Self {
        ReleaseDatesQuery::new(p.release_id)
            .with_range(supplied(p.start_date), supplied(p.end_date))
            .with_limit(p.limit)
    }
}
