/// Utilities for date formatting
///
/// Provides consistent date formatting across the portal tables
use chrono::NaiveDate;

/// Today's date from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Format a date as "Dec 1, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Like [`format_date`], with "-" for a missing date
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_date(date), "Dec 1, 2025");
        let date = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        assert_eq!(format_date(date), "Nov 28, 2025");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date_opt(None), "-");
    }
}
