//! Utilities for date formatting
//!
//! Campaign dates arrive as ISO strings and are shown in en-US short form.

use contracts::dashboards::d100_campaign_overview::field::parse_calendar_date;

/// Format ISO date string to "Mon D, YYYY"
/// Example: "2024-12-01" or "2024-12-01T10:00:00Z" -> "Dec 1, 2024"
pub fn format_date(date_str: &str) -> String {
    match parse_calendar_date(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-12-01"), "Dec 1, 2024");
        assert_eq!(format_date("2024-11-30"), "Nov 30, 2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "Mar 15, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
