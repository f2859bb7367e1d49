//! Birthday MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for keeping track of
//! birthdays. It stores contacts with their birth dates, answers "whose birthday is
//! today / coming up" questions, and moves data in and out as CSV.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `BirthdayServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `birthday` module - Birth dates, records and date queries
//! - **Persistence Layer**: `storage` module - File-based TOML storage, `transfer` for CSV
//!
//! # Example
//!
//! ```no_run
//! use birthday_mcp::BirthdayServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = BirthdayServerHandler::new("birthdays.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod birthday;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod logging;
mod storage;
pub mod transfer;
pub mod validation;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

// Re-export commonly used types
pub use birthday::{BirthDate, BirthdayBook, BirthdayRecord, SortOrder, local_date_today};
pub use config::{Settings, SettingsUpdate};
pub use error::{ParseError, StoreError, TransferError, ValidationError};
pub use storage::Storage;

/// MCP Server handler for birthday tracking
///
/// Every change is persisted to a TOML file before the tool call returns.
pub struct BirthdayServerHandler {
    pub(crate) book: Mutex<BirthdayBook>,
    pub(crate) storage: Storage,
}

impl BirthdayServerHandler {
    /// Create a new birthday server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the birthday data file (TOML format). A missing file starts empty.
    ///
    /// # Example
    /// ```no_run
    /// # use birthday_mcp::BirthdayServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = BirthdayServerHandler::new("birthdays.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let book = Mutex::new(storage.load()?);
        Ok(Self { book, storage })
    }

    /// Lock the in-memory book. A poisoned lock still holds consistent data
    /// because every mutation is a single call on `BirthdayBook`.
    pub(crate) fn lock_book(&self) -> MutexGuard<'_, BirthdayBook> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the book, reporting failures to the client
    pub(crate) fn save_with_message(&self, book: &BirthdayBook, message: &str) -> McpResult<()> {
        if let Err(e) = self.storage.save(book) {
            error!("{} failed: {:#}", message, e);
            bail_public!(_, "Failed to save: {}", e);
        }
        info!("{}", message);
        Ok(())
    }

    pub fn storage_path(&self) -> &Path {
        self.storage.file_path()
    }

    /// Snapshot of every stored record, in storage order
    pub fn records(&self) -> Vec<BirthdayRecord> {
        self.lock_book().list().to_vec()
    }

    pub fn current_settings(&self) -> Settings {
        self.lock_book().settings.clone()
    }

    /// Apply a settings change outside of MCP (command line overrides)
    pub fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut book = self.lock_book();
        book.settings.apply(update);
        self.storage.save(&book)?;
        info!("Settings updated from command line");
        Ok(())
    }
}

/// Birthday tracking server.
///
/// Keeps a list of people with their birthdays and optional contact details
/// (phone, email, social media URL, notes). The birth year is optional: a birthday
/// given as MM-DD has no known year and no age is shown for it.
///
/// Dates:
/// - Birthdays: YYYY-MM-DD (year known) or MM-DD (year unknown)
/// - Reference dates (`date` parameters): YYYY-MM-DD, defaults to the local date
/// - Feb 29 birthdays are observed on Feb 28 in common years
///
/// Records are identified by UUIDs shown in every listing.
#[mcp_server]
impl McpServer for BirthdayServerHandler {
    /// **Add**: Record a new person's birthday. Returns the generated ID.
    /// **Tip**: Use MM-DD when the birth year is unknown.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn add(
        &self,
        /// Person's name
        name: String,
        /// Birthday: YYYY-MM-DD, or MM-DD when the year is unknown
        birthday: String,
        /// Phone number (optional)
        phone_number: Option<String>,
        /// Email address (optional)
        email: Option<String>,
        /// Social media profile URL (optional)
        social_media_url: Option<String>,
        /// Free-form notes (optional)
        notes: Option<String>,
    ) -> McpResult<String> {
        self.handle_add(name, birthday, phone_number, email, social_media_url, notes)
            .await
    }

    /// **List**: Show stored birthdays with countdowns, optionally filtered by keyword.
    /// **Sort**: "chronological" (next birthday first) or "alphabetical". Default from settings.
    #[tool]
    async fn list(
        &self,
        /// Sort order: chronological/alphabetical (optional)
        sort: Option<String>,
        /// Case-insensitive name filter (optional)
        keyword: Option<String>,
        /// Reference date YYYY-MM-DD for countdowns (optional, default today)
        date: Option<String>,
        /// Leave notes out of the output (optional, default false)
        exclude_notes: Option<bool>,
    ) -> McpResult<String> {
        self.handle_list(sort, keyword, date, exclude_notes).await
    }

    /// **Update**: Change fields of an existing record. Omitted fields are kept.
    /// **Tip**: Use empty string "" to clear optional contact fields.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn update(
        &self,
        /// ID of the record to update
        id: String,
        /// New name (optional)
        name: Option<String>,
        /// New birthday YYYY-MM-DD or MM-DD (optional)
        birthday: Option<String>,
        /// Phone number, ""=clear (optional)
        phone_number: Option<String>,
        /// Email address, ""=clear (optional)
        email: Option<String>,
        /// Social media URL, ""=clear (optional)
        social_media_url: Option<String>,
        /// Notes, ""=clear (optional)
        notes: Option<String>,
    ) -> McpResult<String> {
        self.handle_update(
            id,
            name,
            birthday,
            phone_number,
            email,
            social_media_url,
            notes,
        )
        .await
    }

    /// **Delete**: Permanently remove a record by ID.
    #[tool]
    async fn delete(
        &self,
        /// ID of the record to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }

    /// **Today**: Whose birthday is it today?
    #[tool]
    async fn today(
        &self,
        /// Reference date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_today(date).await
    }

    /// **Upcoming**: Birthdays from tomorrow through the next N days, soonest first.
    #[tool]
    async fn upcoming(
        &self,
        /// Number of days to look ahead (optional, default from settings)
        days: Option<u32>,
        /// Reference date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_upcoming(days, date).await
    }

    /// **Widget**: Today's and upcoming birthdays as JSON, for dashboards and widgets.
    #[tool]
    async fn widget(
        &self,
        /// Reference date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_widget(date).await
    }

    /// **Export**: Write every record to a CSV file.
    #[tool]
    async fn export_csv(
        &self,
        /// Destination file path
        path: String,
    ) -> McpResult<String> {
        self.handle_export_csv(path).await
    }

    /// **Import**: Merge records from a CSV file. Rows with a known ID replace that record.
    /// Invalid rows are skipped and reported with their line numbers.
    #[tool]
    async fn import_csv(
        &self,
        /// Source file path
        path: String,
    ) -> McpResult<String> {
        self.handle_import_csv(path).await
    }

    /// **Settings**: Show settings, or change them when any parameter is given.
    #[tool]
    async fn settings(
        &self,
        /// Default look-ahead for `upcoming` in days (optional)
        upcoming_days: Option<u32>,
        /// Show known birth years in listings (optional)
        show_year_in_list: Option<bool>,
        /// Default list order: chronological/alphabetical (optional)
        sort: Option<String>,
    ) -> McpResult<String> {
        self.handle_settings(upcoming_days, show_year_in_list, sort)
            .await
    }
}
