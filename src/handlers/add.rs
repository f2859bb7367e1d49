//! Add handler for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::birthday::BirthdayRecord;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl BirthdayServerHandler {
    /// Creates a record with a fresh id. Empty contact strings are stored as absent.
    pub async fn handle_add(
        &self,
        name: String,
        birthday: String,
        phone_number: Option<String>,
        email: Option<String>,
        social_media_url: Option<String>,
        notes: Option<String>,
    ) -> McpResult<String> {
        let name = validation::parse_name(&name)?;
        let birthday = validation::parse_birthday(&birthday)?;

        let mut record = match BirthdayRecord::new(&name, birthday) {
            Ok(r) => r,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };
        record.phone_number = validation::normalize_optional(phone_number);
        record.email = validation::normalize_optional(email);
        record.social_media_url = validation::normalize_optional(social_media_url);
        record.notes = validation::normalize_optional(notes);
        let id = record.id();

        let mut book = self.lock_book();
        if let Err(e) = book.insert(record) {
            drop(book);
            bail_public!(_, "{}", e);
        }
        self.save_with_message(&book, &format!("Add birthday {} ({})", id, name))?;
        drop(book);

        Ok(format!("Birthday created with ID: {} (name: {})", id, name))
    }
}
