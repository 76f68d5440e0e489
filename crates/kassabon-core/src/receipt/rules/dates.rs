//! Date extraction for receipt lines.

use chrono::NaiveDate;

use super::patterns::DATE_DMY;

/// First day-month-year date in the line, as the raw printed substring.
///
/// Receipts print dates in too many variants to normalize reliably, so the
/// matched text is kept verbatim.
pub fn find_date(line: &str) -> Option<&str> {
    DATE_DMY.find(line).map(|m| m.as_str())
}

/// Render a date in the Dutch short convention: d-m-yyyy, no zero padding.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d-%-m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_date_keeps_raw_substring() {
        assert_eq!(find_date("12-03-2024 19:32"), Some("12-03-2024"));
        assert_eq!(find_date("3/4/24"), Some("3/4/24"));
    }

    #[test]
    fn test_find_date_first_match_wins() {
        assert_eq!(find_date("12-03-2024 tot 19-03-2024"), Some("12-03-2024"));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(find_date("Melk 1,29"), None);
    }

    #[test]
    fn test_format_short_date_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(format_short_date(date), "6-3-2024");
    }
}
