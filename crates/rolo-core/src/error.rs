//! Error types for `rolo-core`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("name cannot be empty")]
  EmptyName,

  #[error("wrong phone format: {0:?} (expected 10 digits)")]
  InvalidPhoneFormat(String),

  #[error("invalid date format: {0:?} (use DD.MM.YYYY)")]
  InvalidDateFormat(String),

  #[error("birthday cannot be in the future: {0}")]
  FutureBirthday(NaiveDate),

  #[error("no such name found: {0}")]
  NameNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
