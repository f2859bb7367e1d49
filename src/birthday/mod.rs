//! Birthday domain models and queries
//!
//! - `birth_date`: month/day/optional-year value and next-occurrence arithmetic
//! - `record`: a person's record with contact fields
//! - `book`: the owning collection (list/insert/update/delete by id)
//! - `queries`: today/upcoming/search/sort views and the widget projection

mod birth_date;
mod book;
mod queries;
mod record;

pub use birth_date::{BirthDate, PLACEHOLDER_YEAR, local_date_today};
pub use book::{BirthdayBook, FORMAT_VERSION};
pub use queries::{
    BirthdaySummary, SortOrder, WidgetSnapshot, search, sort_records, todays_birthdays,
    upcoming_birthdays, widget_snapshot,
};
pub use record::BirthdayRecord;
