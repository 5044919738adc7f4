//! Helpers for the hard-coded datasets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One labelled value of a summary chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u32,
}

pub fn series(points: &[(&str, u32)]) -> Vec<SeriesPoint> {
    points
        .iter()
        .map(|(label, value)| SeriesPoint {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

/// Bar length in percent of the largest value of the series.
pub fn bar_percent(points: &[SeriesPoint], value: u32) -> u32 {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    if max == 0 {
        0
    } else {
        value * 100 / max
    }
}

/// Calendar date for optional fields ("-" in the tables when absent).
pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Calendar date for required fields. Mock literals are always valid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Table cell text for an optional date.
pub fn date_cell(value: Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Case-insensitive "any of these fields contains the query" filter used by
/// the searchable tables.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_cell() {
        assert_eq!(date_cell(date(2025, 12, 1)), "2025-12-01");
        assert_eq!(date_cell(None), "-");
        assert_eq!(date(2025, 2, 30), None);
    }

    #[test]
    fn test_bar_percent_scales_to_largest() {
        let points = series(&[("Mon", 12), ("Thu", 24), ("Sun", 0)]);
        assert_eq!(bar_percent(&points, 24), 100);
        assert_eq!(bar_percent(&points, 12), 50);
        assert_eq!(bar_percent(&[], 5), 0);
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("  dela ", &["P001", "Juan Dela Cruz"]));
        assert!(!matches_query("reyes", &["P001", "Juan Dela Cruz"]));
    }
}
