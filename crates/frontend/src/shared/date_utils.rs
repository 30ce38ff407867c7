use chrono::{DateTime, NaiveDate, Utc};

/// Format an ISO date string (YYYY-MM-DD) as DD/MM/YYYY for display.
/// Returns the input unchanged when it does not parse.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Format a UTC timestamp as DD/MM/YYYY HH:MM for display.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Today's date in ISO form, as used by the dashboard "orders today" card
/// and as the default value of the dispatch scheduling form.
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-07"), "07/03/2025");
        assert_eq!(format_date("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_format_date_passthrough_on_garbage() {
        assert_eq!(format_date("no date"), "no date");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_datetime(&dt), "07/03/2025 14:05");
    }
}
