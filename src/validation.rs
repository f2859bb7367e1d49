//! Validation helper functions for the birthday MCP server
//!
//! Turns raw tool parameters into domain values, reporting problems as
//! INVALID_PARAMS errors the client can show to the user.

use crate::birthday::{BirthDate, BirthdayRecord, SortOrder, local_date_today};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use uuid::Uuid;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a birthday in `YYYY-MM-DD`, `MM-DD` or `--MM-DD` form
pub fn parse_birthday(input: &str) -> McpResult<BirthDate> {
    input
        .parse::<BirthDate>()
        .map_err(|e| invalid_params(e.to_string()))
}

/// Validate and trim a display name
pub fn parse_name(input: &str) -> McpResult<String> {
    BirthdayRecord::validate_name(input).map_err(|e| invalid_params(e.to_string()))
}

/// Parse the optional reference date, defaulting to the local date
pub fn parse_reference_date(date: Option<&str>) -> McpResult<NaiveDate> {
    match date {
        None => Ok(local_date_today()),
        Some(date_str) => NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
            invalid_params(format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ))
        }),
    }
}

/// Parse a record id
pub fn parse_record_id(id: &str) -> McpResult<Uuid> {
    Uuid::parse_str(id.trim())
        .map_err(|_| invalid_params(format!("Invalid id '{}'. Expected a UUID.", id)))
}

/// Parse a sort order name
pub fn parse_sort_order(order: &str) -> McpResult<SortOrder> {
    order.parse::<SortOrder>().map_err(invalid_params)
}

/// Treat an empty string as "no value"
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birthday() {
        assert_eq!(
            parse_birthday("1990-06-15").unwrap(),
            BirthDate::new(6, 15, Some(1990)).unwrap()
        );
        assert_eq!(
            parse_birthday("06-15").unwrap(),
            BirthDate::new(6, 15, None).unwrap()
        );
        assert!(parse_birthday("2023-02-29").is_err());
        assert!(parse_birthday("tomorrow").is_err());
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Ada ").unwrap(), "Ada");
        assert!(parse_name(" ").is_err());
    }

    #[test]
    fn test_parse_reference_date() {
        assert_eq!(
            parse_reference_date(Some("2024-06-15")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(parse_reference_date(None).unwrap(), local_date_today());
        assert!(parse_reference_date(Some("15/06/2024")).is_err());
    }

    #[test]
    fn test_parse_record_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&format!(" {} ", id)).unwrap(), id);
        assert!(parse_record_id("abc").is_err());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some(String::new())), None);
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some("x".to_string())),
            Some("x".to_string())
        );
    }
}
