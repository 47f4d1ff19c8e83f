//! Plain-text rendering of provider responses.
//!
//! Each FRED endpoint answers with one top-level collection whose key depends
//! on what was asked for. [`ResponseShape`] names those collections; the
//! `render_*` functions turn a response into the text block a tool returns,
//! falling back to a fixed "not found" sentence when the collection is absent.

use serde_json::Value;

/// Substituted for any field the provider left out.
pub const PLACEHOLDER: &str = "N/A";

/// Observations shown per series listing (most recent last).
pub const OBSERVATION_WINDOW: usize = 20;

/// The collection a provider response is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    SeriesList,
    ObservationList,
    CategoryList,
    ReleaseList,
    ReleaseDateList,
}

impl ResponseShape {
    /// Top-level key holding the collection.
    pub const fn key(self) -> &'static str {
        match self {
            Self::SeriesList => "seriess",
            Self::ObservationList => "observations",
            Self::CategoryList => "categories",
            Self::ReleaseList => "releases",
            Self::ReleaseDateList => "release_dates",
        }
    }

    /// The collection, if the response has one under the expected key.
    pub fn entries(self, doc: &Value) -> Option<&[Value]> {
        doc.get(self.key())?.as_array().map(Vec::as_slice)
    }

    /// First element of a non-empty collection.
    pub fn first(self, doc: &Value) -> Option<&Value> {
        self.entries(doc)?.first()
    }
}

/// Render a field as text; strings verbatim, other JSON scalars as JSON.
fn field(entry: &Value, name: &str) -> String {
    match entry.get(name) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Whether an optional field is worth a line of its own.
fn present(entry: &Value, name: &str) -> bool {
    match entry.get(name) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

fn push_series_entry(out: &mut String, series: &Value) {
    out.push_str(&format!(
        "**{}**: {}\n",
        field(series, "id"),
        field(series, "title")
    ));
    out.push_str(&format!("  Units: {}\n", field(series, "units")));
    out.push_str(&format!("  Frequency: {}\n", field(series, "frequency")));
    out.push_str(&format!(
        "  Last Updated: {}\n\n",
        field(series, "last_updated")
    ));
}

/// `series/search` → count-prefixed enumeration of every match.
pub fn render_series_search(search_text: &str, doc: &Value) -> String {
    let Some(series_list) = ResponseShape::SeriesList.entries(doc) else {
        return format!("No series found matching '{search_text}'");
    };

    let mut out = format!(
        "Found {} series matching '{}':\n\n",
        series_list.len(),
        search_text
    );
    for series in series_list {
        push_series_entry(&mut out, series);
    }
    out
}

/// `series/observations` → the most recent [`OBSERVATION_WINDOW`] points.
///
/// Input order is kept; the provider sorts ascending by date so the tail is
/// the most recent data.
pub fn render_observations(series_id: &str, doc: &Value) -> String {
    let Some(observations) = ResponseShape::ObservationList.entries(doc) else {
        return format!("No data found for series {series_id}");
    };

    let mut out = format!("Data for series {series_id}:\n\n");
    let skipped = observations.len().saturating_sub(OBSERVATION_WINDOW);
    for obs in &observations[skipped..] {
        out.push_str(&format!("{}: {}\n", field(obs, "date"), field(obs, "value")));
    }

    if skipped > 0 {
        out.push_str(&format!("\n... and {skipped} more observations"));
    }
    out
}

/// `series` → detail block for the first series in the response.
pub fn render_series_info(series_id: &str, doc: &Value) -> String {
    let Some(series) = ResponseShape::SeriesList.first(doc) else {
        return format!("Series {series_id} not found");
    };

    let mut out = format!("Series Information for {series_id}:\n\n");
    for (label, key) in [
        ("Title", "title"),
        ("Units", "units"),
        ("Frequency", "frequency"),
        ("Seasonal Adjustment", "seasonal_adjustment"),
        ("Last Updated", "last_updated"),
        ("Notes", "notes"),
    ] {
        out.push_str(&format!("**{label}**: {}\n", field(series, key)));
    }
    out
}

/// `category` → one block per category, with the parent when it is not the root.
pub fn render_categories(doc: &Value) -> String {
    let Some(categories) = ResponseShape::CategoryList.entries(doc) else {
        return "No categories found".to_string();
    };

    let mut out = String::from("FRED Categories:\n\n");
    for category in categories {
        out.push_str(&format!(
            "**{}**: {}\n",
            field(category, "id"),
            field(category, "name")
        ));
        if present(category, "parent_id") {
            out.push_str(&format!("  Parent ID: {}\n", field(category, "parent_id")));
        }
        out.push('\n');
    }
    out
}

fn has_press_release(release: &Value) -> bool {
    match release.get("press_release") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// `releases` → the release collection.
pub fn render_releases(doc: &Value) -> String {
    let Some(releases) = ResponseShape::ReleaseList.entries(doc) else {
        return "No releases found".to_string();
    };

    let mut out = format!(
        "FRED Releases (showing {} releases):\n\n",
        releases.len()
    );
    for release in releases {
        out.push_str(&format!(
            "**{}**: {}\n",
            field(release, "id"),
            field(release, "name")
        ));
        if has_press_release(release) {
            out.push_str("  📰 Has Press Release\n");
        }
        if present(release, "link") {
            out.push_str(&format!("  🔗 Link: {}\n", field(release, "link")));
        }
        out.push('\n');
    }
    out
}

/// `release` → detail block for a single release.
pub fn render_release_detail(release_id: u64, doc: &Value) -> String {
    let Some(release) = ResponseShape::ReleaseList.first(doc) else {
        return format!("Release {release_id} not found");
    };

    let mut out = format!("Release Information for ID {release_id}:\n\n");
    for (label, key) in [
        ("Name", "name"),
        ("Press Release", "press_release"),
        ("Link", "link"),
        ("Notes", "notes"),
        ("Real Time Start", "realtime_start"),
        ("Real Time End", "realtime_end"),
    ] {
        out.push_str(&format!("**{label}**: {}\n", field(release, key)));
    }
    out
}

/// `release/series` → the series published under a release.
pub fn render_release_series(release_id: u64, doc: &Value) -> String {
    let Some(series_list) = ResponseShape::SeriesList.entries(doc) else {
        return format!("No series found for release {release_id}");
    };

    let mut out = format!(
        "Series for Release {} (showing {} series):\n\n",
        release_id,
        series_list.len()
    );
    for series in series_list {
        push_series_entry(&mut out, series);
    }
    out
}

/// `release/dates` → publication dates of a release.
pub fn render_release_dates(release_id: u64, doc: &Value) -> String {
    let Some(dates) = ResponseShape::ReleaseDateList.entries(doc) else {
        return format!("No release dates found for release {release_id}");
    };

    let mut out = format!(
        "Release Dates for Release {} (showing {} dates):\n\n",
        release_id,
        dates.len()
    );
    for date in dates {
        out.push_str(&format!("**{}**\n", field(date, "date")));
        if present(date, "release_name") {
            out.push_str(&format!("  Release: {}\n", field(date, "release_name")));
        }
        if present(date, "release_id") {
            out.push_str(&format!("  Release ID: {}\n", field(date, "release_id")));
        }
        out.push('\n');
    }
    out
}
