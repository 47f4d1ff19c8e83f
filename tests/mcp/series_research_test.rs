//! Economist persona: finding and reading a series.
//!
//! Flow: search → series metadata → observations, plus category browsing.

use serde_json::{json, Value};

use super::harness::McpTestHarness;

fn cpi_series() -> Value {
    json!({
        "id": "CPIAUCSL",
        "title": "Consumer Price Index for All Urban Consumers: All Items in U.S. City Average",
        "units": "Index 1982-1984=100",
        "frequency": "Monthly",
        "seasonal_adjustment": "Seasonally Adjusted",
        "last_updated": "2024-02-13 07:38:02-06",
        "notes": null
    })
}

#[tokio::test]
async fn test_search_then_inspect_series() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;
    harness
        .respond(
            "/series/search",
            json!({ "seriess": [cpi_series(), { "id": "CPILFESL", "title": "Core CPI" }] }),
        )
        .await;
    harness
        .respond("/series", json!({ "seriess": [cpi_series()] }))
        .await;

    let search = harness
        .call_tool("search_economic_data", json!({ "search_text": "consumer price" }))
        .await?;
    assert!(search.starts_with("Found 2 series matching 'consumer price':\n\n"));
    assert!(search.contains("**CPILFESL**: Core CPI\n  Units: N/A\n"));

    let info = harness
        .call_tool("get_series_info", json!({ "series_id": "CPIAUCSL" }))
        .await?;
    assert_eq!(
        info,
        "Series Information for CPIAUCSL:\n\n\
         **Title**: Consumer Price Index for All Urban Consumers: All Items in U.S. City Average\n\
         **Units**: Index 1982-1984=100\n\
         **Frequency**: Monthly\n\
         **Seasonal Adjustment**: Seasonally Adjusted\n\
         **Last Updated**: 2024-02-13 07:38:02-06\n\
         **Notes**: N/A\n"
    );

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_observation_window() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;
    let observations: Vec<Value> = (0..25)
        .map(|month| {
            json!({
                "date": format!("{}-{:02}-01", 2022 + month / 12, month % 12 + 1),
                "value": format!("{}", 300 + month)
            })
        })
        .collect();
    harness
        .respond("/series/observations", json!({ "observations": observations }))
        .await;

    let text = harness
        .call_tool(
            "get_economic_series",
            json!({ "series_id": "CPIAUCSL", "start_date": "2022-01-01", "end_date": "2024-01-01" }),
        )
        .await?;

    let data_lines: Vec<&str> = text.lines().filter(|l| l.contains(": ")).collect();
    assert_eq!(data_lines.len(), 20);
    assert_eq!(data_lines[0], "2022-06-01: 305");
    assert_eq!(data_lines[19], "2024-01-01: 324");
    assert!(text.ends_with("\n... and 5 more observations"));

    let requests = harness.provider.received_requests().await.unwrap_or_default();
    let query: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert!(query.contains(&("observation_start".into(), "2022-01-01".into())));
    assert!(query.contains(&("observation_end".into(), "2024-01-01".into())));
    assert!(query.contains(&("limit".into(), "100".into())));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_empty_series_is_not_found_text() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;
    harness.respond("/series", json!({ "seriess": [] })).await;
    harness
        .respond("/series/observations", json!({ "count": 0 }))
        .await;

    let info = harness
        .call_tool("get_series_info", json!({ "series_id": "ZZZ" }))
        .await?;
    assert_eq!(info, "Series ZZZ not found");

    let data = harness
        .call_tool("get_economic_series", json!({ "series_id": "ZZZ" }))
        .await?;
    assert_eq!(data, "No data found for series ZZZ");

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_browse_categories() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;
    harness
        .respond(
            "/category",
            json!({ "categories": [
                { "id": 0, "name": "Categories", "parent_id": 0 },
                { "id": 32991, "name": "Money, Banking, & Finance", "parent_id": 0 },
                { "id": 22, "name": "Interest Rates", "parent_id": 32991 }
            ] }),
        )
        .await;

    let text = harness.call_tool("get_categories", json!({})).await?;
    assert!(text.starts_with("FRED Categories:\n\n**0**: Categories\n\n"));
    assert!(text.contains("**22**: Interest Rates\n  Parent ID: 32991\n\n"));
    assert_eq!(text.matches("Parent ID").count(), 1);

    harness
        .call_tool("get_categories", json!({ "category_id": 22 }))
        .await?;
    let requests = harness.provider.received_requests().await.unwrap_or_default();
    assert!(requests.iter().all(|r| r.url.path() == "/category"));
    assert!(requests[1]
        .url
        .query_pairs()
        .any(|(k, v)| k == "category_id" && v == "22"));

    harness.teardown().await?;
    Ok(())
}
