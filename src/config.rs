//! User settings stored alongside the birthday book
//!
//! Settings are an explicit value handed to the query functions; nothing reads
//! them from ambient state.

use crate::birthday::SortOrder;
use serde::{Deserialize, Serialize};

/// Default "upcoming" lead time in days
pub const DEFAULT_UPCOMING_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Upcoming window: tomorrow through this many days ahead
    pub upcoming_days: u32,
    /// Show the birth year (when known) in list output
    pub show_year_in_list: bool,
    /// Default ordering for `list`
    pub sort_order: SortOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            show_year_in_list: false,
            sort_order: SortOrder::Chronological,
        }
    }
}

/// A partial settings change; `None` leaves the current value alone
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub upcoming_days: Option<u32>,
    pub show_year_in_list: Option<bool>,
    pub sort_order: Option<SortOrder>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.upcoming_days.is_none() && self.show_year_in_list.is_none() && self.sort_order.is_none()
    }
}

impl Settings {
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(days) = update.upcoming_days {
            self.upcoming_days = days;
        }
        if let Some(show_year) = update.show_year_in_list {
            self.show_year_in_list = show_year;
        }
        if let Some(order) = update.sort_order {
            self.sort_order = order;
        }
    }
}
