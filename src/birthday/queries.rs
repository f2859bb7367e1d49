//! Read-only views over a set of birthday records
//!
//! Every function takes the reference date explicitly so results are
//! reproducible and independent of the wall clock.

use super::record::BirthdayRecord;
use crate::config::Settings;
use crate::formatting;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use uuid::Uuid;

/// Ordering for record listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Soonest next birthday first, then by name
    Chronological,
    /// By name, case-insensitive
    Alphabetical,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "chronological" => Ok(SortOrder::Chronological),
            "alphabetical" => Ok(SortOrder::Alphabetical),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid options are: chronological, alphabetical",
                s
            )),
        }
    }
}

fn compare_names(a: &BirthdayRecord, b: &BirthdayRecord) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort records in place by the given order
pub fn sort_records(records: &mut [&BirthdayRecord], order: SortOrder, today: NaiveDate) {
    match order {
        SortOrder::Chronological => records.sort_by(|a, b| {
            a.next_occurrence(today)
                .cmp(&b.next_occurrence(today))
                .then_with(|| compare_names(a, b))
        }),
        SortOrder::Alphabetical => records.sort_by(|a, b| compare_names(a, b)),
    }
}

/// Records whose birthday is observed today, sorted by name
pub fn todays_birthdays(records: &[BirthdayRecord], today: NaiveDate) -> Vec<&BirthdayRecord> {
    let mut todays: Vec<&BirthdayRecord> = records.iter().filter(|r| r.is_today(today)).collect();
    todays.sort_by(|a, b| compare_names(a, b));
    todays
}

/// Records with a birthday from tomorrow through `lead_time_days` ahead
///
/// Today's birthdays are excluded. Sorted by days remaining, then by name.
pub fn upcoming_birthdays(
    records: &[BirthdayRecord],
    today: NaiveDate,
    lead_time_days: u32,
) -> Vec<&BirthdayRecord> {
    let window = 1..=i64::from(lead_time_days);
    let mut upcoming: Vec<&BirthdayRecord> = records
        .iter()
        .filter(|r| window.contains(&r.days_until_next(today)))
        .collect();
    sort_records(&mut upcoming, SortOrder::Chronological, today);
    upcoming
}

/// Case-insensitive name search. A blank keyword matches everything.
pub fn search<'a>(records: &'a [BirthdayRecord], keyword: &str) -> Vec<&'a BirthdayRecord> {
    let keyword_lower = keyword.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&keyword_lower))
        .collect()
}

/// Read-only projection of a record for widgets and notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdaySummary {
    pub id: Uuid,
    pub name: String,
    pub formatted_birthday: String,
    pub days_until: i64,
    /// Age turned on the next birthday; absent when the year is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turning_age: Option<i32>,
}

impl BirthdaySummary {
    pub fn from_record(record: &BirthdayRecord, today: NaiveDate, show_year: bool) -> Self {
        Self {
            id: record.id(),
            name: record.name.clone(),
            formatted_birthday: formatting::format_birthday(&record.birthday, show_year),
            days_until: record.days_until_next(today),
            turning_age: record.age_on_next(today),
        }
    }
}

/// Everything a home-screen widget needs for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub generated_on: NaiveDate,
    pub todays_birthdays: Vec<BirthdaySummary>,
    pub upcoming_birthdays: Vec<BirthdaySummary>,
}

pub fn widget_snapshot(
    records: &[BirthdayRecord],
    today: NaiveDate,
    settings: &Settings,
) -> WidgetSnapshot {
    let summarize = |r: &&BirthdayRecord| {
        BirthdaySummary::from_record(r, today, settings.show_year_in_list)
    };
    WidgetSnapshot {
        generated_on: today,
        todays_birthdays: todays_birthdays(records, today)
            .iter()
            .map(summarize)
            .collect(),
        upcoming_birthdays: upcoming_birthdays(records, today, settings.upcoming_days)
            .iter()
            .map(summarize)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birthday::BirthDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: &str) -> BirthdayRecord {
        BirthdayRecord::new(name, birthday.parse::<BirthDate>().unwrap()).unwrap()
    }

    fn names(records: &[&BirthdayRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn sample() -> Vec<BirthdayRecord> {
        vec![
            record("zoe", "1990-06-15"),
            record("Adam", "--06-15"),
            record("Beth", "1985-06-20"),
            record("Carl", "2000-01-01"),
            record("Dana", "--06-16"),
            record("Eve", "1970-07-15"),
        ]
    }

    #[test]
    fn test_todays_birthdays_sorted_by_name() {
        let records = sample();
        let todays = todays_birthdays(&records, date(2024, 6, 15));
        assert_eq!(names(&todays), vec!["Adam", "zoe"]);
    }

    #[test]
    fn test_upcoming_window_starts_tomorrow() {
        let records = sample();
        let today = date(2024, 6, 15);

        let upcoming = upcoming_birthdays(&records, today, 5);
        assert_eq!(names(&upcoming), vec!["Dana", "Beth"]);

        let upcoming = upcoming_birthdays(&records, today, 4);
        assert_eq!(names(&upcoming), vec!["Dana"]);

        let upcoming = upcoming_birthdays(&records, today, 30);
        assert_eq!(names(&upcoming), vec!["Dana", "Beth", "Eve"]);

        assert!(upcoming_birthdays(&records, today, 0).is_empty());
    }

    #[test]
    fn test_upcoming_wraps_year_end() {
        let records = sample();
        let upcoming = upcoming_birthdays(&records, date(2024, 12, 25), 7);
        assert_eq!(names(&upcoming), vec!["Carl"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        assert_eq!(names(&search(&records, "A")), vec!["Adam", "Carl", "Dana"]);
        assert_eq!(names(&search(&records, "ZO")), vec!["zoe"]);
        assert_eq!(search(&records, "  ").len(), records.len());
        assert!(search(&records, "nobody").is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let records = sample();
        let today = date(2024, 6, 17);

        let mut all: Vec<&BirthdayRecord> = records.iter().collect();
        sort_records(&mut all, SortOrder::Alphabetical, today);
        assert_eq!(
            names(&all),
            vec!["Adam", "Beth", "Carl", "Dana", "Eve", "zoe"]
        );

        sort_records(&mut all, SortOrder::Chronological, today);
        assert_eq!(
            names(&all),
            vec!["Beth", "Eve", "Carl", "Adam", "zoe", "Dana"]
        );
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("alphabetical".parse(), Ok(SortOrder::Alphabetical));
        assert_eq!(" chronological ".parse(), Ok(SortOrder::Chronological));
        assert!("random".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_widget_snapshot() {
        let records = sample();
        let settings = Settings {
            upcoming_days: 7,
            ..Settings::default()
        };
        let snapshot = widget_snapshot(&records, date(2024, 6, 15), &settings);

        assert_eq!(snapshot.generated_on, date(2024, 6, 15));
        assert_eq!(snapshot.todays_birthdays.len(), 2);
        assert_eq!(snapshot.todays_birthdays[0].name, "Adam");
        assert_eq!(snapshot.todays_birthdays[0].turning_age, None);
        assert_eq!(snapshot.todays_birthdays[1].turning_age, Some(34));
        assert_eq!(snapshot.todays_birthdays[1].days_until, 0);

        let upcoming: Vec<(&str, i64)> = snapshot
            .upcoming_birthdays
            .iter()
            .map(|s| (s.name.as_str(), s.days_until))
            .collect();
        assert_eq!(upcoming, vec![("Dana", 1), ("Beth", 5)]);
        assert_eq!(snapshot.upcoming_birthdays[1].formatted_birthday, "June 20");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["generated_on"], "2024-06-15");
        assert!(json["todays_birthdays"][0].get("turning_age").is_none());
    }
}
