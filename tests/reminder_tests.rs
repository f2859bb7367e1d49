//! Today / upcoming / widget tests against a fixed reference date
mod common;

use common::*;
use serde_json::Value;

async fn seeded_handler() -> (birthday_mcp::BirthdayServerHandler, tempfile::NamedTempFile) {
    let (handler, temp_file) = get_test_handler();
    add_birthday(&handler, "Ann", "1990-06-15").await;
    add_birthday(&handler, "Bob", "06-16").await;
    add_birthday(&handler, "Cat", "1985-07-20").await;
    add_birthday(&handler, "Dee", "2000-02-29").await;
    (handler, temp_file)
}

#[tokio::test]
async fn test_today() {
    let (handler, _temp_file) = seeded_handler().await;

    let today = handler
        .handle_today(Some("2024-06-15".to_string()))
        .await
        .unwrap();
    assert!(today.starts_with("Found 1 birthday(s):"));
    assert!(today.contains("Ann: June 15 (Today)"));
    assert!(today.contains("Turning: 34"));
    assert!(!today.contains("Bob"));

    let nobody = handler
        .handle_today(Some("2024-06-14".to_string()))
        .await
        .unwrap();
    assert_eq!(nobody, "No birthdays today (2024-06-14)");
}

#[tokio::test]
async fn test_leap_day_birthday_observed_on_feb_28() {
    let (handler, _temp_file) = seeded_handler().await;

    let common_year = handler
        .handle_today(Some("2023-02-28".to_string()))
        .await
        .unwrap();
    assert!(common_year.contains("Dee"));
    assert!(common_year.contains("Turning: 23"));

    let leap_eve = handler
        .handle_today(Some("2024-02-28".to_string()))
        .await
        .unwrap();
    assert!(!leap_eve.contains("Dee"));

    let leap_day = handler
        .handle_today(Some("2024-02-29".to_string()))
        .await
        .unwrap();
    assert!(leap_day.contains("Dee"));
}

#[tokio::test]
async fn test_upcoming_uses_configured_window() {
    let (handler, _temp_file) = seeded_handler().await;
    let date = Some("2024-06-15".to_string());

    let default_window = handler.handle_upcoming(None, date.clone()).await.unwrap();
    assert!(default_window.starts_with("Found 1 birthday(s):"));
    assert!(default_window.contains("Bob: June 16 (Tomorrow)"));
    assert!(!default_window.contains("Ann"));
    assert!(!default_window.contains("Cat"));

    let wider = handler.handle_upcoming(Some(35), date.clone()).await.unwrap();
    assert!(wider.contains("Found 2 birthday(s):"));
    assert!(wider.find("Bob").unwrap() < wider.find("Cat").unwrap());
    assert!(wider.contains("Cat: July 20 (in 35 days)"));

    let none = handler.handle_upcoming(Some(0), date).await.unwrap();
    assert_eq!(none, "No birthdays in the next 0 day(s)");
}

#[tokio::test]
async fn test_upcoming_wraps_year_end() {
    let (handler, _temp_file) = get_test_handler();
    add_birthday(&handler, "New Year", "01-02").await;

    let result = handler
        .handle_upcoming(Some(5), Some("2024-12-30".to_string()))
        .await
        .unwrap();
    assert!(result.contains("New Year: January 2 (in 3 days)"));
}

#[tokio::test]
async fn test_widget_json() {
    let (handler, _temp_file) = seeded_handler().await;

    let json = handler
        .handle_widget(Some("2024-06-15".to_string()))
        .await
        .unwrap();
    let snapshot: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot["generated_on"], "2024-06-15");

    let todays = snapshot["todays_birthdays"].as_array().unwrap();
    assert_eq!(todays.len(), 1);
    assert_eq!(todays[0]["name"], "Ann");
    assert_eq!(todays[0]["formatted_birthday"], "June 15");
    assert_eq!(todays[0]["days_until"], 0);
    assert_eq!(todays[0]["turning_age"], 34);

    let upcoming = snapshot["upcoming_birthdays"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["name"], "Bob");
    assert_eq!(upcoming[0]["days_until"], 1);
    assert!(upcoming[0].get("turning_age").is_none());
}

#[tokio::test]
async fn test_invalid_reference_date() {
    let (handler, _temp_file) = get_test_handler();

    assert!(handler.handle_today(Some("06/15/2024".to_string())).await.is_err());
    assert!(
        handler
            .handle_upcoming(None, Some("2024-02-30".to_string()))
            .await
            .is_err()
    );
    assert!(handler.handle_widget(Some("yesterday".to_string())).await.is_err());
}
