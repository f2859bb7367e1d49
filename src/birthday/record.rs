use super::birth_date::BirthDate;
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A person and their birthday
///
/// The `id` is assigned once at creation and never changes; everything else
/// can be edited. Derived values (today/next occurrence/age) are computed
/// against a caller-supplied reference date and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRecord {
    id: Uuid,
    /// Display name, trimmed and never empty
    #[serde(deserialize_with = "deserialize_name")]
    pub name: String,
    /// Month/day and optional year of birth
    pub birthday: BirthDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media_url: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BirthdayRecord {
    /// Create a record with a freshly generated id
    pub fn new(name: &str, birthday: BirthDate) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, birthday)
    }

    /// Create a record that keeps an existing id (imports, restores)
    pub fn with_id(id: Uuid, name: &str, birthday: BirthDate) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: Self::validate_name(name)?,
            birthday,
            phone_number: None,
            email: None,
            social_media_url: None,
            notes: None,
        })
    }

    /// Trim a display name, rejecting blank input
    pub fn validate_name(name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn year_known(&self) -> bool {
        self.birthday.year_known()
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.birthday.is_today(today)
    }

    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        self.birthday.next_occurrence(today)
    }

    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        self.birthday.days_until_next(today)
    }

    pub fn age_on_next(&self, today: NaiveDate) -> Option<i32> {
        self.birthday.age_on_next(today)
    }

    /// Whether any phone/email/social field holds a non-blank value
    pub fn has_contact_info(&self) -> bool {
        [&self.phone_number, &self.email, &self.social_media_url]
            .into_iter()
            .flatten()
            .any(|value| !value.trim().is_empty())
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    BirthdayRecord::validate_name(&name).map_err(serde::de::Error::custom)
}
