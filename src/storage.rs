use crate::birthday::BirthdayBook;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML file persistence for the birthday book
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the book; a missing file yields an empty book
    pub fn load(&self) -> Result<BirthdayBook> {
        if !self.file_path.exists() {
            debug!("{} does not exist yet, starting empty", self.file_path.display());
            return Ok(BirthdayBook::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let book: BirthdayBook = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        debug!(
            "Loaded {} birthday(s) from {}",
            book.len(),
            self.file_path.display()
        );
        Ok(book)
    }

    pub fn save(&self, book: &BirthdayBook) -> Result<()> {
        let content = toml::to_string_pretty(book)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(
            "Saved {} birthday(s) to {}",
            book.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
