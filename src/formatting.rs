//! Formatting helper functions for the birthday MCP server
//!
//! This module contains the display logic for dates, countdowns and record lists.

use crate::birthday::{BirthDate, BirthdayRecord};
use crate::transfer::CsvImport;
use chrono::{Month, NaiveDate};

/// Format a birthday as "May 19", or "May 19, 1990" when `show_year` is set
/// and the year is known
pub fn format_birthday(birthday: &BirthDate, show_year: bool) -> String {
    let month = u8::try_from(birthday.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or_default();
    match birthday.year() {
        Some(year) if show_year => format!("{} {}, {}", month, birthday.day(), year),
        _ => format!("{} {}", month, birthday.day()),
    }
}

/// Human countdown: "Today", "Tomorrow", "in N days"
pub fn days_until_text(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}

/// Format records into a display string
///
/// # Arguments
/// * `records` - Records to format, already filtered and sorted
/// * `today` - Reference date for countdowns and ages
/// * `show_year` - Whether to include known birth years
/// * `exclude_notes` - Whether to leave notes out of the output
pub fn format_records(
    records: &[&BirthdayRecord],
    today: NaiveDate,
    show_year: bool,
    exclude_notes: bool,
) -> String {
    if records.is_empty() {
        return "No birthdays found".to_string();
    }

    let mut result = format!("Found {} birthday(s):\n\n", records.len());
    for record in records {
        result.push_str(&format!(
            "- [{}] {}: {} ({})\n",
            record.id(),
            record.name,
            format_birthday(&record.birthday, show_year),
            days_until_text(record.days_until_next(today))
        ));

        if let Some(age) = record.age_on_next(today) {
            result.push_str(&format!("  Turning: {}\n", age));
        }
        if let Some(ref phone) = record.phone_number {
            result.push_str(&format!("  Phone: {}\n", phone));
        }
        if let Some(ref email) = record.email {
            result.push_str(&format!("  Email: {}\n", email));
        }
        if let Some(ref url) = record.social_media_url {
            result.push_str(&format!("  Social: {}\n", url));
        }
        if !exclude_notes && let Some(ref notes) = record.notes {
            result.push_str(&format!("  Notes: {}\n", notes));
        }
    }

    result
}

/// Summarize a CSV import, listing every rejected row
pub fn format_import_report(import: &CsvImport, added: usize, updated: usize) -> String {
    let mut result = format!(
        "Imported {} birthday(s): {} added, {} updated, {} row(s) skipped\n",
        import.records.len(),
        added,
        updated,
        import.skipped()
    );
    for error in &import.errors {
        result.push_str(&format!("  - {}\n", error));
    }
    result
}
