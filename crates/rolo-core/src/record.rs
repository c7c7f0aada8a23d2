//! [`Record`] — a single contact.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{Birthday, PhoneNumber, validate_birthday, validate_phone},
};

/// Shown in place of a birthday that was never set.
pub const NO_BIRTHDAY: &str = "No birthday set";

/// One contact: a name, its phone numbers in insertion order, and an optional
/// birthday.
///
/// The name is the record's key inside an [`AddressBook`](crate::AddressBook)
/// and cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
  name:     String,
  phones:   Vec<PhoneNumber>,
  birthday: Option<Birthday>,
}

/// Decoded shape of a [`Record`], checked before it becomes one.
#[derive(Deserialize)]
struct RecordData {
  name:     String,
  #[serde(default)]
  phones:   Vec<PhoneNumber>,
  #[serde(default)]
  birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
  type Error = Error;

  fn try_from(data: RecordData) -> Result<Self> {
    if data.name.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self {
      name:     data.name,
      phones:   data.phones,
      birthday: data.birthday,
    })
  }
}

impl Record {
  /// Create a record with no phones. The name must be non-empty and a
  /// supplied birthday must validate.
  pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self> {
    let name = name.into();
    if name.is_empty() {
      return Err(Error::EmptyName);
    }
    let birthday = birthday.map(validate_birthday).transpose()?;
    Ok(Self {
      name,
      phones: Vec::new(),
      birthday,
    })
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn phones(&self) -> &[PhoneNumber] { &self.phones }

  pub fn birthday(&self) -> Option<Birthday> { self.birthday }

  // ── Phones ──────────────────────────────────────────────────────────────

  /// Validate `phone` and append it. Duplicates are kept.
  pub fn add_phone(&mut self, phone: &str) -> Result<()> {
    self.phones.push(validate_phone(phone)?);
    Ok(())
  }

  /// Remove every phone equal to `phone`. Absent numbers are ignored.
  pub fn delete_phone(&mut self, phone: &str) {
    self.phones.retain(|p| p.as_str() != phone);
  }

  /// Replace `old` with `new`.
  ///
  /// Runs as delete-then-add: when `new` fails validation the error is
  /// returned but `old` has already been removed.
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
    self.delete_phone(old);
    self.add_phone(new)
  }

  /// The first phone textually equal to `phone`.
  pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
    self.phones.iter().find(|p| p.as_str() == phone)
  }

  /// Overwrite the first phone with `new`, or append it when the record has no
  /// phones yet. Nothing changes unless `new` validates.
  pub fn replace_primary_phone(&mut self, new: &str) -> Result<()> {
    let phone = validate_phone(new)?;
    match self.phones.first_mut() {
      Some(primary) => *primary = phone,
      None => self.phones.push(phone),
    }
    Ok(())
  }

  // ── Birthday ────────────────────────────────────────────────────────────

  /// Set, overwrite, or (with `None`) clear the birthday.
  pub fn add_birthday(&mut self, birthday: Option<&str>) -> Result<()> {
    self.birthday = birthday.map(validate_birthday).transpose()?;
    Ok(())
  }

  /// The birthday as `DD.MM.YYYY`, or [`NO_BIRTHDAY`].
  pub fn get_birthday(&self) -> String {
    self
      .birthday
      .map(|b| b.to_string())
      .unwrap_or_else(|| NO_BIRTHDAY.to_owned())
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let phones = self
      .phones
      .iter()
      .map(PhoneNumber::as_str)
      .collect::<Vec<_>>()
      .join("; ");
    write!(
      f,
      "{:<10} | phone: {:<10} | birthday: {}",
      self.name,
      phones,
      self.get_birthday()
    )
  }
}
