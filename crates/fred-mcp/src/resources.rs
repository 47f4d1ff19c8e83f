//! Static, hand-curated resources.
//!
//! These lists are not provider data: they are served verbatim and never
//! trigger a network call.

use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};

pub const POPULAR_SERIES_URI: &str = "fred://popular-series";
pub const POPULAR_RELEASES_URI: &str = "fred://popular-releases";

const TEXT_MIME: &str = "text/plain";

pub const POPULAR_SERIES: &str = "Popular FRED Economic Data Series:

GDP - Gross Domestic Product
UNRATE - Unemployment Rate
CPIAUCSL - Consumer Price Index for All Urban Consumers
FEDFUNDS - Federal Funds Rate
DGS10 - 10-Year Treasury Constant Maturity Rate
DEXUSEU - US/Euro Foreign Exchange Rate
PAYEMS - All Employees, Total Nonfarm
HOUST - Housing Starts
INDPRO - Industrial Production Index
CPILFESL - Core CPI (excluding food and energy)";

pub const POPULAR_RELEASES: &str = "Popular FRED Economic Data Releases:

53 - Gross Domestic Product
10 - Employment Situation
24 - Consumer Price Index
62 - Federal Reserve Economic Data
18 - Industrial Production and Capacity Utilization
20 - Housing Starts
25 - Personal Income and Outlays
50 - Flow of Funds
13 - G.17 Industrial Production and Capacity Utilization
21 - New Residential Construction
17 - Productivity and Costs
51 - Senior Loan Officer Opinion Survey
52 - Survey of Terms of Business Lending";

struct StaticResource {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    text: &'static str,
}

const STATIC_RESOURCES: [StaticResource; 2] = [
    StaticResource {
        uri: POPULAR_SERIES_URI,
        name: "popular_series",
        description: "List of popular economic data series",
        text: POPULAR_SERIES,
    },
    StaticResource {
        uri: POPULAR_RELEASES_URI,
        name: "popular_releases",
        description: "List of popular economic data releases",
        text: POPULAR_RELEASES,
    },
];

/// Descriptors for `resources/list`.
pub fn list() -> Vec<Resource> {
    STATIC_RESOURCES
        .iter()
        .map(|r| {
            let mut raw = RawResource::new(r.uri, r.name);
            raw.description = Some(r.description.to_string());
            raw.mime_type = Some(TEXT_MIME.to_string());
            raw.size = u32::try_from(r.text.len()).ok();
            raw.no_annotation()
        })
        .collect()
}

/// Fixed text for a resource URI, if it is one of ours.
pub fn text_for(uri: &str) -> Option<&'static str> {
    STATIC_RESOURCES
        .iter()
        .find(|r| r.uri == uri)
        .map(|r| r.text)
}

/// Contents for `resources/read`.
pub fn read(uri: &str) -> Option<ResourceContents> {
    text_for(uri).map(|text| ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(TEXT_MIME.to_string()),
        text: text.to_string(),
        meta: None,
    })
}
