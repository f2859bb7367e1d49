//! Delete handler for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl BirthdayServerHandler {
    /// Permanently removes a record.
    pub async fn handle_delete(&self, id: String) -> McpResult<String> {
        let id = validation::parse_record_id(&id)?;

        let mut book = self.lock_book();
        let removed = match book.delete(id) {
            Ok(r) => r,
            Err(e) => {
                drop(book);
                bail_public!(
                    _,
                    "{}. Use list() to see available birthdays.",
                    e
                );
            }
        };
        self.save_with_message(&book, &format!("Delete birthday {}", id))?;
        drop(book);

        Ok(format!("Birthday {} ({}) deleted", id, removed.name))
    }
}
