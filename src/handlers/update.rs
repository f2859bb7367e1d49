//! Update handler for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl BirthdayServerHandler {
    /// Edits a record in place. The id never changes.
    /// Optional contact fields: `None` keeps the value, `""` clears it.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_update(
        &self,
        id: String,
        name: Option<String>,
        birthday: Option<String>,
        phone_number: Option<String>,
        email: Option<String>,
        social_media_url: Option<String>,
        notes: Option<String>,
    ) -> McpResult<String> {
        let id = validation::parse_record_id(&id)?;
        let name = match name {
            Some(ref n) => Some(validation::parse_name(n)?),
            None => None,
        };
        let birthday = match birthday {
            Some(ref b) => Some(validation::parse_birthday(b)?),
            None => None,
        };

        let mut book = self.lock_book();
        let mut record = match book.find(id) {
            Some(r) => r.clone(),
            None => {
                drop(book);
                bail_public!(
                    _,
                    "Birthday '{}' not found. Use list() to see available birthdays.",
                    id
                );
            }
        };

        if let Some(name) = name {
            record.name = name;
        }
        if let Some(birthday) = birthday {
            record.birthday = birthday;
        }
        if let Some(phone) = phone_number {
            record.phone_number = validation::normalize_optional(Some(phone));
        }
        if let Some(email) = email {
            record.email = validation::normalize_optional(Some(email));
        }
        if let Some(url) = social_media_url {
            record.social_media_url = validation::normalize_optional(Some(url));
        }
        if let Some(notes) = notes {
            record.notes = validation::normalize_optional(Some(notes));
        }

        if let Err(e) = book.update(record) {
            drop(book);
            bail_public!(_, "{}", e);
        }
        self.save_with_message(&book, &format!("Update birthday {}", id))?;
        drop(book);

        Ok(format!("Birthday {} updated successfully", id))
    }
}
