//! Common test utilities for integration tests
#![allow(dead_code)]

use birthday_mcp::BirthdayServerHandler;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (BirthdayServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = BirthdayServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
    (handler, temp_file)
}

/// Extract the record ID from an add() response
/// Response format: "Birthday created with ID: <id> (name: <name>)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    String::new()
}

/// Add a record with no contact details, returning its id
pub async fn add_birthday(handler: &BirthdayServerHandler, name: &str, birthday: &str) -> String {
    let response = handler
        .handle_add(
            name.to_string(),
            birthday.to_string(),
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();
    extract_id_from_response(&response)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
