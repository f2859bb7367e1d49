//! Settings tool tests
mod common;

use birthday_mcp::{BirthdayServerHandler, Settings, SortOrder};
use common::*;

#[tokio::test]
async fn test_show_defaults() {
    let (handler, _temp_file) = get_test_handler();

    let shown = handler.handle_settings(None, None, None).await.unwrap();
    assert!(shown.contains("upcoming_days: 30"));
    assert!(shown.contains("show_year_in_list: false"));
    assert!(shown.contains("sort_order: chronological"));
}

#[tokio::test]
async fn test_update_and_persist() {
    let (handler, temp_file) = get_test_handler();

    let result = handler
        .handle_settings(Some(7), Some(true), Some("alphabetical".to_string()))
        .await
        .unwrap();
    assert!(result.starts_with("Settings updated."));
    assert!(result.contains("upcoming_days: 7"));

    let reloaded = BirthdayServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(
        reloaded.current_settings(),
        Settings {
            upcoming_days: 7,
            show_year_in_list: true,
            sort_order: SortOrder::Alphabetical,
        }
    );
}

#[tokio::test]
async fn test_settings_drive_queries() {
    let (handler, _temp_file) = get_test_handler();
    add_birthday(&handler, "Zed", "1980-06-16").await;
    add_birthday(&handler, "Amy", "06-25").await;
    let date = Some("2024-06-15".to_string());

    let before = handler.handle_list(None, None, date.clone(), None).await.unwrap();
    assert!(before.find("Zed").unwrap() < before.find("Amy").unwrap());
    assert!(before.contains("Zed: June 16 (Tomorrow)"));

    handler
        .handle_settings(Some(3), Some(true), Some("alphabetical".to_string()))
        .await
        .unwrap();

    let after = handler.handle_list(None, None, date.clone(), None).await.unwrap();
    assert!(after.find("Amy").unwrap() < after.find("Zed").unwrap());
    assert!(after.contains("Zed: June 16, 1980 (Tomorrow)"));
    assert!(after.contains("Amy: June 25 (in 10 days)"));

    let upcoming = handler.handle_upcoming(None, date).await.unwrap();
    assert!(upcoming.contains("Zed"));
    assert!(!upcoming.contains("Amy"));
}

#[tokio::test]
async fn test_invalid_sort_rejected() {
    let (handler, _temp_file) = get_test_handler();

    assert!(
        handler
            .handle_settings(None, None, Some("random".to_string()))
            .await
            .is_err()
    );
    assert_eq!(handler.current_settings(), Settings::default());
}
