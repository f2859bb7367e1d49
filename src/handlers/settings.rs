//! Settings handler for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::config::{Settings, SettingsUpdate};
use crate::validation;
use mcp_attr::Result as McpResult;

fn describe(settings: &Settings) -> String {
    format!(
        "Settings:\n  upcoming_days: {}\n  show_year_in_list: {}\n  sort_order: {}\n",
        settings.upcoming_days,
        settings.show_year_in_list,
        match settings.sort_order {
            crate::birthday::SortOrder::Chronological => "chronological",
            crate::birthday::SortOrder::Alphabetical => "alphabetical",
        }
    )
}

impl BirthdayServerHandler {
    /// Shows the settings, applying any given changes first.
    pub async fn handle_settings(
        &self,
        upcoming_days: Option<u32>,
        show_year_in_list: Option<bool>,
        sort: Option<String>,
    ) -> McpResult<String> {
        let sort_order = match sort {
            Some(ref order) => Some(validation::parse_sort_order(order)?),
            None => None,
        };
        let update = SettingsUpdate {
            upcoming_days,
            show_year_in_list,
            sort_order,
        };

        let mut book = self.lock_book();
        if update.is_empty() {
            return Ok(describe(&book.settings));
        }

        book.settings.apply(&update);
        self.save_with_message(&book, "Update settings")?;
        Ok(format!("Settings updated.\n{}", describe(&book.settings)))
    }
}
