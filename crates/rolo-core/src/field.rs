//! Validated field types — the values a [`Record`](crate::Record) is built
//! from.
//!
//! Each type can only be obtained through its validator, so a value that made
//! it into the model is known to be well-formed.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// The textual pattern accepted for birthdays (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

// ─── PhoneNumber ─────────────────────────────────────────────────────────────

/// A phone number of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
  pub fn as_str(&self) -> &str { &self.0 }
}

/// Validate `raw` as a [`PhoneNumber`].
///
/// Fails with [`Error::InvalidPhoneFormat`] unless `raw` is exactly ten ASCII
/// digits; no normalisation is attempted.
pub fn validate_phone(raw: &str) -> Result<PhoneNumber> {
  if raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit()) {
    Ok(PhoneNumber(raw.to_owned()))
  } else {
    Err(Error::InvalidPhoneFormat(raw.to_owned()))
  }
}

impl fmt::Display for PhoneNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl PartialEq<str> for PhoneNumber {
  fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl Serialize for PhoneNumber {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    self.0.serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for PhoneNumber {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    validate_phone(&s).map_err(serde::de::Error::custom)
  }
}

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A calendar date that was not in the future when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
  pub fn date(&self) -> NaiveDate { self.0 }
}

/// Validate `raw` as a [`Birthday`] against the local calendar date.
pub fn validate_birthday(raw: &str) -> Result<Birthday> {
  validate_birthday_on(raw, Local::now().date_naive())
}

/// Validate `raw` as a [`Birthday`], treating `today` as the current date.
///
/// A birthday falling on `today` itself is accepted; only dates strictly after
/// it are rejected with [`Error::FutureBirthday`].
pub fn validate_birthday_on(raw: &str, today: NaiveDate) -> Result<Birthday> {
  let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
    .map_err(|_| Error::InvalidDateFormat(raw.to_owned()))?;
  if date > today {
    return Err(Error::FutureBirthday(date));
  }
  Ok(Birthday(date))
}

impl fmt::Display for Birthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
  }
}

// Stored as `DD.MM.YYYY`. Decoding checks the format only: a date that was
// valid when saved never becomes a future date later.
impl Serialize for Birthday {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Birthday {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, BIRTHDAY_FORMAT)
      .map(Birthday)
      .map_err(|_| serde::de::Error::custom(Error::InvalidDateFormat(s)))
  }
}

#[cfg(test)]
mod tests {
  use chrono::Days;

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  // ─── Phones ────────────────────────────────────────────────────────────────

  #[test]
  fn ten_digits_is_a_phone() {
    for raw in ["0123456789", "5555555555", "0000000000", "9876543210"] {
      let phone = validate_phone(raw).unwrap();
      assert_eq!(phone.as_str(), raw);
      assert_eq!(phone.to_string(), raw);
    }
  }

  #[test]
  fn wrong_length_is_rejected() {
    for raw in ["", "123", "123456789", "12345678901"] {
      assert_eq!(
        validate_phone(raw),
        Err(Error::InvalidPhoneFormat(raw.to_owned()))
      );
    }
  }

  #[test]
  fn non_digits_are_rejected() {
    for raw in ["12345abcde", "+123456789", "123-456-78", "１２３４５６７８９０"] {
      assert!(matches!(
        validate_phone(raw),
        Err(Error::InvalidPhoneFormat(_))
      ));
    }
  }

  #[test]
  fn phone_deserialisation_validates() {
    let phone: PhoneNumber = serde_json::from_str("\"0501234567\"").unwrap();
    assert_eq!(phone.as_str(), "0501234567");

    let bad: std::result::Result<PhoneNumber, _> =
      serde_json::from_str("\"050-123\"");
    assert!(bad.is_err());
  }

  // ─── Birthdays ─────────────────────────────────────────────────────────────

  #[test]
  fn past_date_is_a_birthday() {
    let today = date(2024, 6, 1);
    let b = validate_birthday_on("15.06.1990", today).unwrap();
    assert_eq!(b.date(), date(1990, 6, 15));
    assert_eq!(b.to_string(), "15.06.1990");
  }

  #[test]
  fn today_is_not_in_the_future() {
    let today = date(2024, 6, 1);
    assert!(validate_birthday_on("01.06.2024", today).is_ok());
  }

  #[test]
  fn future_date_is_rejected() {
    let today = date(2024, 6, 1);
    assert_eq!(
      validate_birthday_on("02.06.2024", today),
      Err(Error::FutureBirthday(date(2024, 6, 2)))
    );
  }

  #[test]
  fn malformed_dates_are_rejected() {
    let today = date(2024, 6, 1);
    for raw in ["1990-06-15", "15/06/1990", "31.02.1990", "15.13.1990", "yesterday", ""]
    {
      assert_eq!(
        validate_birthday_on(raw, today),
        Err(Error::InvalidDateFormat(raw.to_owned())),
        "{raw:?} should not parse"
      );
    }
  }

  #[test]
  fn wall_clock_validator_uses_local_date() {
    let today = Local::now().date_naive();
    let yesterday = today - Days::new(1);
    let tomorrow = today + Days::new(1);

    let past = yesterday.format(BIRTHDAY_FORMAT).to_string();
    assert_eq!(validate_birthday(&past).unwrap().date(), yesterday);

    let future = tomorrow.format(BIRTHDAY_FORMAT).to_string();
    assert_eq!(validate_birthday(&future), Err(Error::FutureBirthday(tomorrow)));
  }

  #[test]
  fn birthday_serialises_as_display_text() {
    let b = validate_birthday_on("29.02.2000", date(2024, 1, 1)).unwrap();
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, "\"29.02.2000\"");
    let back: Birthday = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
  }
}
