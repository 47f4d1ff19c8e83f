//! MCP ServerHandler implementation for FRED.
//!
//! Exposes seven read-only tools over the FRED API and two static resources:
//!
//! **Series**
//! - `search_economic_data`: Full-text search over series titles and notes
//! - `get_economic_series`: Observations for a series, most recent 20 shown
//! - `get_series_info`: Metadata block for a single series
//!
//! **Categories & Releases**
//! - `get_categories`: Root category or a specific category
//! - `get_releases`: All releases, or one release's detail when `release_id` is given
//! - `get_release_series`: Series published under a release
//! - `get_release_dates`: Publication dates of a release
//!
//! **Resources**
//! - `fred://popular-series`, `fred://popular-releases`: curated text lists

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    Implementation, ListResourcesResult, PaginatedRequestParams, ProtocolVersion,
    ReadResourceRequestParams, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use fred_client::{
    CategoryQuery, ClientError, FredClient, FredSettings, ObservationsQuery, ReleaseDatesQuery,
    ReleaseSeriesQuery, SeriesQuery, SeriesSearchQuery,
};

use crate::resources;
use crate::tools::helpers::client_error_to_mcp;
use crate::tools::*;

/// FRED MCP server handler.
///
/// Clones share one lazily-created [`FredClient`].
#[derive(Debug, Clone)]
pub struct FredMcpServer {
    tool_router: ToolRouter<Self>,
    settings: FredSettings,
    client: Arc<OnceCell<FredClient>>,
}

impl Default for FredMcpServer {
    fn default() -> Self {
        Self::new(FredSettings::from_env())
    }
}

impl FredMcpServer {
    /// Create a server whose client is built from `settings` on first tool use.
    pub fn new(settings: FredSettings) -> Self {
        Self {
            tool_router: Self::tool_router(),
            settings,
            client: Arc::new(OnceCell::new()),
        }
    }

    /// Create a server around an already-built client.
    pub fn with_client(client: FredClient) -> Self {
        let settings = FredSettings::default().with_base_url(client.base_url());
        Self {
            tool_router: Self::tool_router(),
            settings,
            client: Arc::new(OnceCell::new_with(Some(client))),
        }
    }

    pub fn settings(&self) -> &FredSettings {
        &self.settings
    }

    /// Whether the shared client has been created yet.
    pub fn client_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Shared client, created on first call.
    ///
    /// Concurrent first calls wait on the same initialization. A missing key
    /// fails here, before any request is attempted.
    async fn client(&self) -> Result<&FredClient, McpError> {
        self.client
            .get_or_try_init(|| async {
                let client = FredClient::from_settings(&self.settings)?;
                info!(base_url = %client.base_url(), "FRED client initialized");
                Ok::<_, ClientError>(client)
            })
            .await
            .map_err(client_error_to_mcp)
    }

    /// Release the shared client if this is the last handle and it was ever created.
    pub fn shutdown(self) {
        match Arc::try_unwrap(self.client) {
            Ok(cell) => match cell.into_inner() {
                Some(client) => client.shutdown(),
                None => debug!("FRED client never initialized, nothing to release"),
            },
            Err(_) => debug!("FRED client still shared, leaving release to the last handle"),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FredMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "fred-mcp".to_string(),
                title: Some("FRED MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing the Federal Reserve Economic Data (FRED) API: \
                     series search, observations, categories, and releases"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FRED provides economic time series from the Federal Reserve Bank of St. Louis.\n\
                 Discover series: search_economic_data, or browse get_categories.\n\
                 Inspect a series: get_series_info for metadata, then get_economic_series for \
                 observations (optionally bounded by start_date/end_date in YYYY-MM-DD).\n\
                 Releases: get_releases lists releases, or details one when release_id is given; \
                 get_release_series and get_release_dates drill into a release.\n\
                 Resources fred://popular-series and fred://popular-releases list common IDs."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        debug!(uri = %request.uri, "read_resource");
        match resources::read(&request.uri) {
            Some(contents) => Ok(ReadResourceResult {
                contents: vec![contents],
            }),
            None => Err(McpError::resource_not_found(
                format!("Unknown resource: {}", request.uri),
                Some(json!({ "uri": request.uri })),
            )),
        }
    }
}

#[tool_router(router = tool_router)]
impl FredMcpServer {
    // ── Series ──

    #[tool(
        name = "search_economic_data",
        description = "Search for economic data series in FRED database. Returns matching series with ID, title, units, frequency and last update."
    )]
    pub async fn search_economic_data(
        &self,
        Parameters(params): Parameters<SearchEconomicDataParams>,
    ) -> Result<String, McpError> {
        let query = SeriesSearchQuery::from(params);
        debug!(search_text = %query.search_text, limit = query.limit, "search_economic_data");
        let doc = self
            .client()
            .await?
            .search_series(&query)
            .await
            .map_err(client_error_to_mcp)?;
        Ok(render::render_series_search(&query.search_text, &doc))
    }

    #[tool(
        name = "get_economic_series",
        description = "Get data for a specific economic data series (e.g., 'GDP', 'UNRATE', 'CPIAUCSL'). Shows the 20 most recent observations in the requested window."
    )]
    pub async fn get_economic_series(
        &self,
        Parameters(params): Parameters<GetEconomicSeriesParams>,
    ) -> Result<String, McpError> {
        let query = ObservationsQuery::from(params);
        debug!(series_id = %query.series_id, limit = query.limit, "get_economic_series");
        let doc = self
            .client()
            .await?
            .get_series_observations(&query)
            .await
            .map_err(client_error_to_mcp)?;
        Ok(render::render_observations(&query.series_id, &doc))
    }

    #[tool(
        name = "get_series_info",
        description = "Get detailed information about an economic data series: title, units, frequency, seasonal adjustment, last update, and notes."
    )]
    pub async fn get_series_info(
        &self,
        Parameters(params): Parameters<GetSeriesInfoParams>,
    ) -> Result<String, McpError> {
        let query = SeriesQuery::from(params);
        debug!(series_id = %query.series_id, "get_series_info");
        let doc = self
            .client()
            .await?
            .get_series(&query)
            .await
            .map_err(client_error_to_mcp)?;
        Ok(render::render_series_info(&query.series_id, &doc))
    }

    // ── Categories & Releases ──

    #[tool(
        name = "get_categories",
        description = "Get FRED data categories. Returns the root category when category_id is omitted."
    )]
    pub async fn get_categories(
        &self,
        Parameters(params): Parameters<GetCategoriesParams>,
    ) -> Result<String, McpError> {
        let query = CategoryQuery::from(params);
        debug!(category_id = ?query.category_id, "get_categories");
        let doc = self
            .client()
            .await?
            .get_categories(&query)
            .await
            .map_err(client_error_to_mcp)?;
        Ok(render::render_categories(&doc))
    }

    #[tool(
        name = "get_releases",
        description = "Get all FRED data releases or information about a specific release when release_id is given."
    )]
    pub async fn get_releases(
        &self,
        Parameters(params): Parameters<GetReleasesParams>,
    ) -> Result<String, McpError> {
        let request = ReleasesRequest::from(params);
        debug!(?request, "get_releases");
        let client = self.client().await?;
        match request {
            ReleasesRequest::All(query) => {
                let doc = client
                    .get_releases(&query)
                    .await
                    .map_err(client_error_to_mcp)?;
                Ok(render::render_releases(&doc))
            }
            ReleasesRequest::One(query) => {
                let doc = client
                    .get_release(&query)
                    .await
                    .map_err(client_error_to_mcp)?;
                Ok(render::render_release_detail(query.release_id, &doc))
            }
        }
    }

    #[tool(
        name = "get_release_series",
        description = "Get all series for a specific FRED release."
    )]
    pub async fn get_release_series(
        &self,
        Parameters(params): Parameters<GetReleaseSeriesParams>,
    ) -> Result<String, McpError> {
        let query = ReleaseSeriesQuery::from(params);
        debug!(release_id = query.release_id, limit = query.limit, "get_release_series");
        let doc = self
            .client()
            .await?
            .get_release_series(&query)
            .await
            .map_err(client_error_to_mcp)?;
        Ok(render::render_release_series(query.release_id, &doc))
    }

    #[tool(
        name = "get_release_dates",
        description = "Get release dates for a specific FRED release, optionally bounded by start_date/end_date in YYYY-MM-DD format."
    )]
    pub async fn get_release_dates(
        &self,
        Parameters(params): Parameters<GetReleaseDatesParams>,
    ) -> Result<String, McpError> {
        let query = ReleaseDatesQuery::from(params);
        debug!(release_id = query.release_id, limit = query.limit, "get_release_dates");
        let doc = self
            .client()
            .await?
            .get_release_dates(&query)
            .await
            .map_err(client_error_to_mcp)?;
        Ok(render::render_release_dates(query.release_id, &doc))
    }
}
