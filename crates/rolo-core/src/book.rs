//! [`AddressBook`] — the owning collection of records, keyed by name.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use crate::record::Record;

/// Length of the upcoming-birthday window in days, counted from "today".
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// A birthday that falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
  pub name:       String,
  /// The birthday re-anchored to the query year.
  pub birthday:   NaiveDate,
  pub days_until: i64,
}

/// Records keyed by name, in insertion order.
///
/// Re-adding a name replaces the stored record but keeps its position in the
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
  records: IndexMap<String, Record>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  /// Insert `record` under its name. Last write wins.
  pub fn add_record(&mut self, record: Record) {
    self.records.insert(record.name().to_owned(), record);
  }

  /// Remove `name` if present.
  pub fn delete(&mut self, name: &str) -> Option<Record> {
    self.records.shift_remove(name)
  }

  pub fn find(&self, name: &str) -> Option<&Record> { self.records.get(name) }

  pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
    self.records.get_mut(name)
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Records in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &Record> { self.records.values() }

  /// Records whose birthday, moved into `today`'s year, falls between `today`
  /// and [`UPCOMING_WINDOW_DAYS`] days later, both ends inclusive.
  ///
  /// The anchor year is always `today`'s year, so birthdays early next year
  /// are not reported near the end of December. A 29 February birthday is
  /// anchored to 28 February in non-leap years.
  pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
    self
      .iter()
      .filter_map(|record| {
        let birthday = anchor_to_year(record.birthday()?.date(), today.year());
        let days_until = (birthday - today).num_days();
        (0..=UPCOMING_WINDOW_DAYS)
          .contains(&days_until)
          .then(|| UpcomingBirthday {
            name: record.name().to_owned(),
            birthday,
            days_until,
          })
      })
      .collect()
  }
}

fn anchor_to_year(date: NaiveDate, year: i32) -> NaiveDate {
  date
    .with_year(year)
    .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
    .unwrap_or(date)
}
