use chrono::NaiveDate;

/// Dates are exchanged as `YYYY-MM-DD`, the value of an HTML date input.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims the value. Blank optional fields are stored as absent.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
