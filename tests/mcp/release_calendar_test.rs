//! Analyst persona: tracking data releases.
//!
//! Flow: list releases → release detail → release series → release dates.

use serde_json::json;

use super::harness::McpTestHarness;

#[tokio::test]
async fn test_release_drilldown() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;
    harness
        .respond(
            "/releases",
            json!({ "releases": [
                { "id": 10, "name": "Employment Situation", "press_release": true,
                  "link": "http://www.bls.gov/ces/" },
                { "id": 13, "name": "G.17 Industrial Production and Capacity Utilization",
                  "press_release": false, "link": "" }
            ] }),
        )
        .await;
    harness
        .respond(
            "/release",
            json!({ "releases": [{
                "id": 10, "name": "Employment Situation", "press_release": true,
                "link": "http://www.bls.gov/ces/", "realtime_start": "2024-02-20",
                "realtime_end": "2024-02-20"
            }] }),
        )
        .await;
    harness
        .respond(
            "/release/series",
            json!({ "seriess": [{ "id": "PAYEMS", "title": "All Employees, Total Nonfarm",
                                  "units": "Thousands of Persons", "frequency": "Monthly",
                                  "last_updated": "2024-02-02" }] }),
        )
        .await;
    harness
        .respond(
            "/release/dates",
            json!({ "release_dates": [
                { "release_id": 10, "release_name": "Employment Situation", "date": "2024-01-05" },
                { "release_id": 10, "date": "2024-02-02" }
            ] }),
        )
        .await;

    let all = harness.call_tool("get_releases", json!({ "limit": 2 })).await?;
    assert_eq!(
        all,
        "FRED Releases (showing 2 releases):\n\n\
         **10**: Employment Situation\n  📰 Has Press Release\n  🔗 Link: http://www.bls.gov/ces/\n\n\
         **13**: G.17 Industrial Production and Capacity Utilization\n\n"
    );

    let detail = harness
        .call_tool("get_releases", json!({ "release_id": 10 }))
        .await?;
    assert!(detail.starts_with("Release Information for ID 10:\n\n**Name**: Employment Situation\n"));
    assert!(detail.contains("**Press Release**: true\n"));
    assert!(detail.contains("**Notes**: N/A\n"));

    let series = harness
        .call_tool("get_release_series", json!({ "release_id": 10 }))
        .await?;
    assert!(series.starts_with("Series for Release 10 (showing 1 series):\n\n**PAYEMS**"));

    let dates = harness
        .call_tool(
            "get_release_dates",
            json!({ "release_id": 10, "start_date": "2024-01-01", "end_date": "2024-03-01" }),
        )
        .await?;
    assert!(dates.starts_with("Release Dates for Release 10 (showing 2 dates):\n\n"));
    assert!(dates.contains("**2024-01-05**\n  Release: Employment Situation\n  Release ID: 10\n\n"));
    assert!(dates.contains("**2024-02-02**\n  Release ID: 10\n\n"));

    let requests = harness.provider.received_requests().await.unwrap_or_default();
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/releases", "/release", "/release/series", "/release/dates"]);
    let dates_query: Vec<(String, String)> = requests[3].url.query_pairs().into_owned().collect();
    assert!(dates_query.contains(&("realtime_start".into(), "2024-01-01".into())));
    assert!(dates_query.contains(&("realtime_end".into(), "2024-03-01".into())));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_unknown_release_is_not_found_text() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;
    harness.respond("/release", json!({ "releases": [] })).await;
    harness.respond("/release/dates", json!({})).await;

    let detail = harness
        .call_tool("get_releases", json!({ "release_id": 999999 }))
        .await?;
    assert_eq!(detail, "Release 999999 not found");

    let dates = harness
        .call_tool("get_release_dates", json!({ "release_id": 999999 }))
        .await?;
    assert_eq!(dates, "No release dates found for release 999999");

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_popular_resources_need_no_provider() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let releases = harness.read_resource("fred://popular-releases").await?;
    assert!(releases.starts_with("Popular FRED Economic Data Releases:\n\n53 - Gross Domestic Product\n"));
    let series = harness.read_resource("fred://popular-series").await?;
    assert!(series.contains("UNRATE - Unemployment Rate\n"));
    assert_eq!(series, harness.read_resource("fred://popular-series").await?);

    assert_eq!(harness.provider_hits().await, 0);

    harness.teardown().await?;
    Ok(())
}
