use super::record::BirthdayRecord;
use crate::config::Settings;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current on-disk format version of the TOML data file
pub const FORMAT_VERSION: u32 = 1;

fn current_format_version() -> u32 {
    FORMAT_VERSION
}

/// The collection of birthday records plus the user's settings
///
/// This is the root of the TOML data file. Records are kept in a Vec so the
/// file keeps insertion order and produces stable diffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayBook {
    #[serde(default = "current_format_version")]
    pub format_version: u32,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default, rename = "birthday")]
    records: Vec<BirthdayRecord>,
}

impl Default for BirthdayBook {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            settings: Settings::default(),
            records: Vec::new(),
        }
    }
}

impl BirthdayBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[BirthdayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&BirthdayRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Add a new record; its id must not already be present
    pub fn insert(&mut self, record: BirthdayRecord) -> Result<(), StoreError> {
        if self.position(record.id()).is_some() {
            return Err(StoreError::DuplicateId(record.id()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the same id, keeping its position
    pub fn update(&mut self, record: BirthdayRecord) -> Result<(), StoreError> {
        let pos = self
            .position(record.id())
            .ok_or(StoreError::NotFound(record.id()))?;
        self.records[pos] = record;
        Ok(())
    }

    /// Remove a record and return it
    pub fn delete(&mut self, id: Uuid) -> Result<BirthdayRecord, StoreError> {
        let pos = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.records.remove(pos))
    }

    /// Insert or replace by id. Returns `true` when the record was new.
    pub fn upsert(&mut self, record: BirthdayRecord) -> bool {
        match self.position(record.id()) {
            Some(pos) => {
                self.records[pos] = record;
                false
            }
            None => {
                self.records.push(record);
                true
            }
        }
    }
}
