//! Today / upcoming / widget handlers for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::birthday;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl BirthdayServerHandler {
    /// Birthdays observed on the reference date, sorted by name.
    pub async fn handle_today(&self, date: Option<String>) -> McpResult<String> {
        let today = validation::parse_reference_date(date.as_deref())?;

        let book = self.lock_book();
        let todays = birthday::todays_birthdays(book.list(), today);
        if todays.is_empty() {
            return Ok(format!("No birthdays today ({})", today));
        }

        Ok(formatting::format_records(
            &todays,
            today,
            book.settings.show_year_in_list,
            false,
        ))
    }

    /// Birthdays from tomorrow through `days` ahead (default: the configured lead time).
    pub async fn handle_upcoming(&self, days: Option<u32>, date: Option<String>) -> McpResult<String> {
        let today = validation::parse_reference_date(date.as_deref())?;

        let book = self.lock_book();
        let lead_time = days.unwrap_or(book.settings.upcoming_days);
        let upcoming = birthday::upcoming_birthdays(book.list(), today, lead_time);
        if upcoming.is_empty() {
            return Ok(format!("No birthdays in the next {} day(s)", lead_time));
        }

        Ok(formatting::format_records(
            &upcoming,
            today,
            book.settings.show_year_in_list,
            false,
        ))
    }

    /// Widget feed: today's and upcoming birthdays as JSON.
    pub async fn handle_widget(&self, date: Option<String>) -> McpResult<String> {
        let today = validation::parse_reference_date(date.as_deref())?;

        let book = self.lock_book();
        let snapshot = birthday::widget_snapshot(book.list(), today, &book.settings);
        drop(book);

        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => Ok(json),
            Err(e) => {
                bail_public!(_, "Failed to encode widget data: {}", e);
            }
        }
    }
}
