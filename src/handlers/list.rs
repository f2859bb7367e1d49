//! List handler for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::birthday::{self, BirthdayRecord};
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl BirthdayServerHandler {
    /// Handles list/search operations - applies filters and sorting, then formats results for display.
    pub async fn handle_list(
        &self,
        sort: Option<String>,
        keyword: Option<String>,
        date: Option<String>,
        exclude_notes: Option<bool>,
    ) -> McpResult<String> {
        let sort_order = match sort {
            Some(ref order) => Some(validation::parse_sort_order(order)?),
            None => None,
        };
        let today = validation::parse_reference_date(date.as_deref())?;

        let book = self.lock_book();
        let settings = book.settings.clone();
        let mut records: Vec<&BirthdayRecord> = match keyword {
            Some(ref keyword) => birthday::search(book.list(), keyword),
            None => book.list().iter().collect(),
        };
        birthday::sort_records(
            &mut records,
            sort_order.unwrap_or(settings.sort_order),
            today,
        );

        Ok(formatting::format_records(
            &records,
            today,
            settings.show_year_in_list,
            exclude_notes.unwrap_or(false),
        ))
    }
}
