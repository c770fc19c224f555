mod additional_cost;
mod budget;
mod ids;
mod member;
mod project;
mod role;
mod time_log;

pub use additional_cost::*;
pub use budget::*;
pub use ids::*;
pub use member::*;
pub use project::*;
pub use role::*;
pub use time_log::*;

use time::macros::format_description;
use time::Date;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
}

pub(crate) fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Empty descriptions are stored as absent.
pub(crate) fn normalize_description(description: Option<&String>) -> Option<String> {
    description
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_iso_date("2026-01-28").unwrap(), date!(2026 - 01 - 28));
        assert_eq!(parse_iso_date(" 2026-02-01 ").unwrap(), date!(2026 - 02 - 01));
        assert!(parse_iso_date("28/01/2026").is_err());
        assert!(parse_iso_date("2026-02-30").is_err());
    }

    #[test]
    fn blank_descriptions_normalize_to_none() {
        assert_eq!(normalize_description(Some(&"  ".to_string())), None);
        assert_eq!(normalize_description(None), None);
        assert_eq!(
            normalize_description(Some(&" Code review ".to_string())),
            Some("Code review".to_string())
        );
    }
}
