//! # FRED Client
//!
//! Transport to the St. Louis Fed economic-data API (FRED).
//!
//! - [`FredSettings`] resolves the API key and base address from the environment.
//! - [`FredClient`] issues one GET per call, always appending `api_key` and
//!   `file_type=json`, and returns the parsed JSON document untouched.
//! - [`query`] holds one validated struct per endpoint.
//!
//! ```no_run
//! use fred_client::{FredClient, FredSettings, ObservationsQuery};
//!
//! # async fn demo() -> fred_client::ClientResult<()> {
//! let client = FredClient::from_settings(&FredSettings::from_env())?;
//! let doc = client
//!     .get_series_observations(&ObservationsQuery::new("UNRATE").with_limit(12))
//!     .await?;
//! println!("{}", doc["observations"]);
//! client.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::FredClient;
pub use config::{FredSettings, API_KEY_ENV, API_KEY_HELP_URL, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use query::{
    CategoryQuery, EndpointQuery, ObservationsQuery, QueryParams, ReleaseDatesQuery,
    ReleaseQuery, ReleaseSeriesQuery, ReleasesQuery, SeriesQuery, SeriesSearchQuery,
    DEFAULT_LIMIT, DEFAULT_SEARCH_LIMIT,
};
