//! CSV import/export handlers for the birthday MCP server

use crate::BirthdayServerHandler;
use crate::formatting;
use crate::transfer;
use mcp_attr::{Result as McpResult, bail_public};
use std::path::Path;

impl BirthdayServerHandler {
    /// Writes every record to a CSV file.
    pub async fn handle_export_csv(&self, path: String) -> McpResult<String> {
        let records = self.records();

        match transfer::export_csv_file(Path::new(&path), &records) {
            Ok(count) => Ok(format!("Exported {} birthday(s) to {}", count, path)),
            Err(e) => {
                bail_public!(_, "Export failed: {}", e);
            }
        }
    }

    /// Reads a CSV file and merges it into the book.
    /// Rows with a known id replace that record; other rows are added.
    /// Rejected rows are skipped and listed in the response.
    pub async fn handle_import_csv(&self, path: String) -> McpResult<String> {
        let import = match transfer::import_csv_file(Path::new(&path)) {
            Ok(import) => import,
            Err(e) => {
                bail_public!(_, "Import failed: {}", e);
            }
        };

        let mut book = self.lock_book();
        let mut added = 0;
        let mut updated = 0;
        for record in import.records.iter().cloned() {
            if book.upsert(record) {
                added += 1;
            } else {
                updated += 1;
            }
        }
        if added + updated > 0 {
            self.save_with_message(&book, &format!("Import birthdays from {}", path))?;
        }
        drop(book);

        Ok(formatting::format_import_report(&import, added, updated))
    }
}
