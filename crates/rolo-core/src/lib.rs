//! Core types for the rolo address book.
//!
//! This crate holds the validated field types, the [`Record`] and
//! [`AddressBook`] model, and the [`store::BookStore`] persistence seam. It is
//! deliberately free of terminal and filesystem code; the CLI and storage
//! crates depend on it.

pub mod book;
pub mod error;
pub mod field;
pub mod record;
pub mod store;

pub use book::{AddressBook, UPCOMING_WINDOW_DAYS, UpcomingBirthday};
pub use error::{Error, Result};
pub use field::{
  Birthday, PhoneNumber, validate_birthday, validate_birthday_on, validate_phone,
};
pub use record::Record;
