//! Command handlers.
//!
//! Each handler takes the positional arguments of one command line and the
//! address book, and returns a [`Reply`] or a [`CommandError`]. Handlers never
//! print; [`input_error`] turns a failure into the fixed text the user sees.

use chrono::NaiveDate;
use rolo_core::{AddressBook, PhoneNumber, Record, UpcomingBirthday};
use thiserror::Error;
use tracing::debug;

// ─── Replies ──────────────────────────────────────────────────────────────────

/// What a handler hands back to the shell for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
  Text(String),
  Upcoming(Vec<UpcomingBirthday>),
}

impl Reply {
  fn text(s: impl Into<String>) -> Self { Self::Text(s.into()) }

  /// Render for the terminal.
  pub fn render(&self) -> String {
    match self {
      Self::Text(s) => s.clone(),
      Self::Upcoming(list) => list
        .iter()
        .map(|u| {
          format!(
            "{}: {} (in {} days)",
            u.name,
            u.birthday.format("%Y-%m-%d"),
            u.days_until
          )
        })
        .collect::<Vec<_>>()
        .join("\n"),
    }
  }
}

pub const NO_UPCOMING: &str = "No upcoming birthdays";
pub const NO_CONTACTS: &str = "No contacts saved.";

// ─── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CommandError {
  #[error(transparent)]
  Core(#[from] rolo_core::Error),

  #[error("{command}: missing argument <{argument}>")]
  MissingArgument {
    command:  &'static str,
    argument: &'static str,
  },

  #[error("{command}: unexpected argument {value:?}")]
  UnexpectedArgument { command: &'static str, value: String },
}

pub const WRONG_INPUT: &str = "Wrong input";
pub const NAME_NOT_FOUND: &str = "No such name found";
pub const INDEX_ERROR: &str = "Index error";

/// Collapse a handler result into the reply the shell prints.
///
/// Validation failures and surplus arguments become [`WRONG_INPUT`], unknown
/// names [`NAME_NOT_FOUND`], and missing arguments [`INDEX_ERROR`].
pub fn input_error(result: Result<Reply, CommandError>) -> Reply {
  let err = match result {
    Ok(reply) => return reply,
    Err(err) => err,
  };
  debug!(error = %err, "command rejected");

  let text = match err {
    CommandError::Core(rolo_core::Error::NameNotFound(_)) => NAME_NOT_FOUND,
    CommandError::Core(
      rolo_core::Error::EmptyName
      | rolo_core::Error::InvalidPhoneFormat(_)
      | rolo_core::Error::InvalidDateFormat(_)
      | rolo_core::Error::FutureBirthday(_),
    )
    | CommandError::UnexpectedArgument { .. } => WRONG_INPUT,
    CommandError::MissingArgument { .. } => INDEX_ERROR,
  };
  Reply::text(text)
}

// ─── Argument cursor ──────────────────────────────────────────────────────────

/// Positional-argument reader for one command.
struct Args<'a> {
  command: &'static str,
  rest:    std::slice::Iter<'a, &'a str>,
}

impl<'a> Args<'a> {
  fn new(command: &'static str, args: &'a [&'a str]) -> Self {
    Self {
      command,
      rest: args.iter(),
    }
  }

  fn required(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
    self
      .rest
      .next()
      .copied()
      .ok_or(CommandError::MissingArgument {
        command: self.command,
        argument,
      })
  }

  fn optional(&mut self) -> Option<&'a str> { self.rest.next().copied() }

  fn finish(mut self) -> Result<(), CommandError> {
    match self.rest.next() {
      None => Ok(()),
      Some(value) => Err(CommandError::UnexpectedArgument {
        command: self.command,
        value:   (*value).to_owned(),
      }),
    }
  }
}

fn lookup<'b>(book: &'b AddressBook, name: &str) -> Result<&'b Record, CommandError> {
  book
    .find(name)
    .ok_or_else(|| rolo_core::Error::NameNotFound(name.to_owned()).into())
}

fn lookup_mut<'b>(
  book: &'b mut AddressBook,
  name: &str,
) -> Result<&'b mut Record, CommandError> {
  book
    .find_mut(name)
    .ok_or_else(|| rolo_core::Error::NameNotFound(name.to_owned()).into())
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

/// `hello`
pub fn hello(args: &[&str]) -> Result<Reply, CommandError> {
  Args::new("hello", args).finish()?;
  Ok(Reply::text("How can I help you?"))
}

/// `add <name> <phone> [birthday]`
///
/// Builds a fresh record and stores it under `name`, replacing any existing
/// contact with that name. Nothing is stored unless every value validates.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> Result<Reply, CommandError> {
  let mut args = Args::new("add", args);
  let name = args.required("name")?;
  let phone = args.required("phone")?;
  let birthday = args.optional();
  args.finish()?;

  let mut record = Record::new(name, birthday)?;
  record.add_phone(phone)?;
  book.add_record(record);
  Ok(Reply::text("Contact added."))
}

/// `change <name> <phone>` — replace the contact's primary phone.
pub fn change_contact(
  args: &[&str],
  book: &mut AddressBook,
) -> Result<Reply, CommandError> {
  let mut args = Args::new("change", args);
  let name = args.required("name")?;
  let phone = args.required("phone")?;
  args.finish()?;

  lookup_mut(book, name)?.replace_primary_phone(phone)?;
  Ok(Reply::text("Contact updated."))
}

/// `phone <name>`
pub fn phone(args: &[&str], book: &AddressBook) -> Result<Reply, CommandError> {
  let mut args = Args::new("phone", args);
  let name = args.required("name")?;
  args.finish()?;

  let record = lookup(book, name)?;
  if record.phones().is_empty() {
    return Ok(Reply::text(format!("{name} has no phone numbers")));
  }
  let phones = record
    .phones()
    .iter()
    .map(PhoneNumber::as_str)
    .collect::<Vec<_>>()
    .join("; ");
  Ok(Reply::text(format!("Phone number of {name} is {phones}")))
}

/// `all`
pub fn show_all(args: &[&str], book: &AddressBook) -> Result<Reply, CommandError> {
  Args::new("all", args).finish()?;

  if book.is_empty() {
    return Ok(Reply::text(NO_CONTACTS));
  }
  let lines = book
    .iter()
    .map(Record::to_string)
    .collect::<Vec<_>>()
    .join("\n");
  Ok(Reply::Text(lines))
}

/// `show_birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> Result<Reply, CommandError> {
  let mut args = Args::new("show_birthday", args);
  let name = args.required("name")?;
  args.finish()?;

  let record = lookup(book, name)?;
  Ok(Reply::text(format!("{name}'s birthday: {}", record.get_birthday())))
}

/// `add_birthday <name> <birthday>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<Reply, CommandError> {
  let mut args = Args::new("add_birthday", args);
  let name = args.required("name")?;
  let birthday = args.required("birthday")?;
  args.finish()?;

  let record = lookup_mut(book, name)?;
  record.add_birthday(Some(birthday))?;
  Ok(Reply::text(format!("{name}'s birthday: {}", record.get_birthday())))
}

/// `birthdays` — contacts whose birthday falls in the upcoming window.
pub fn birthdays(
  args: &[&str],
  book: &AddressBook,
  today: NaiveDate,
) -> Result<Reply, CommandError> {
  Args::new("birthdays", args).finish()?;

  let upcoming = book.get_upcoming_birthdays(today);
  if upcoming.is_empty() {
    Ok(Reply::text(NO_UPCOMING))
  } else {
    Ok(Reply::Upcoming(upcoming))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn text(s: &str) -> Reply { Reply::Text(s.to_owned()) }

  /// Run a handler through the adapter, as the shell does.
  fn run(
    book: &mut AddressBook,
    f: fn(&[&str], &mut AddressBook) -> Result<Reply, CommandError>,
    args: &[&str],
  ) -> Reply {
    input_error(f(args, book))
  }

  fn book_with_alice() -> AddressBook {
    let mut book = AddressBook::new();
    run(&mut book, add_contact, &["Alice", "0501234567", "15.06.1990"]);
    book
  }

  // ─── add ───────────────────────────────────────────────────────────────────

  #[test]
  fn add_stores_the_contact() {
    let book = book_with_alice();
    let alice = book.find("Alice").unwrap();
    assert_eq!(alice.phones()[0].as_str(), "0501234567");
    assert_eq!(alice.get_birthday(), "15.06.1990");
  }

  #[test]
  fn add_without_birthday() {
    let mut book = AddressBook::new();
    let reply = run(&mut book, add_contact, &["Bob", "0671112233"]);
    assert_eq!(reply, text("Contact added."));
    assert_eq!(book.find("Bob").unwrap().birthday(), None);
  }

  #[test]
  fn add_with_too_few_arguments_is_an_index_error() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, add_contact, &[]), text(INDEX_ERROR));
    assert_eq!(run(&mut book, add_contact, &["Alice"]), text(INDEX_ERROR));
    assert!(book.is_empty());
  }

  #[test]
  fn add_with_too_many_arguments_is_wrong_input() {
    let mut book = AddressBook::new();
    let reply = run(&mut book, add_contact, &[
      "Alice",
      "0501234567",
      "15.06.1990",
      "extra",
    ]);
    assert_eq!(reply, text(WRONG_INPUT));
    assert!(book.is_empty());
  }

  #[test]
  fn add_with_bad_values_stores_nothing() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, add_contact, &["Alice", "12"]), text(WRONG_INPUT));
    assert_eq!(
      run(&mut book, add_contact, &["Alice", "0501234567", "1990-06-15"]),
      text(WRONG_INPUT)
    );
    assert_eq!(
      run(&mut book, add_contact, &["Alice", "0501234567", "01.01.9999"]),
      text(WRONG_INPUT)
    );
    assert!(book.is_empty());
  }

  #[test]
  fn add_replaces_existing_contact() {
    let mut book = book_with_alice();
    run(&mut book, add_contact, &["Alice", "0939998877"]);
    let alice = book.find("Alice").unwrap();
    assert_eq!(alice.phones().len(), 1);
    assert_eq!(alice.phones()[0].as_str(), "0939998877");
    assert_eq!(alice.birthday(), None);
  }

  // ─── change / phone ────────────────────────────────────────────────────────

  #[test]
  fn change_replaces_primary_phone() {
    let mut book = book_with_alice();
    let reply = run(&mut book, change_contact, &["Alice", "0939998877"]);
    assert_eq!(reply, text("Contact updated."));
    assert_eq!(
      input_error(phone(&["Alice"], &book)),
      text("Phone number of Alice is 0939998877")
    );
  }

  #[test]
  fn change_unknown_name() {
    let mut book = AddressBook::new();
    assert_eq!(
      run(&mut book, change_contact, &["Ghost", "0939998877"]),
      text(NAME_NOT_FOUND)
    );
  }

  #[test]
  fn change_with_bad_phone_keeps_old_one() {
    let mut book = book_with_alice();
    assert_eq!(run(&mut book, change_contact, &["Alice", "oops"]), text(WRONG_INPUT));
    assert_eq!(book.find("Alice").unwrap().phones()[0].as_str(), "0501234567");
  }

  #[test]
  fn phone_lists_every_number() {
    let mut book = book_with_alice();
    book
      .find_mut("Alice")
      .unwrap()
      .add_phone("0671112233")
      .unwrap();
    assert_eq!(
      input_error(phone(&["Alice"], &book)),
      text("Phone number of Alice is 0501234567; 0671112233")
    );
    assert_eq!(input_error(phone(&[], &book)), text(INDEX_ERROR));
    assert_eq!(input_error(phone(&["Nobody"], &book)), text(NAME_NOT_FOUND));
  }

  // ─── birthdays ─────────────────────────────────────────────────────────────

  #[test]
  fn show_and_add_birthday() {
    let mut book = AddressBook::new();
    run(&mut book, add_contact, &["Bob", "0671112233"]);
    assert_eq!(
      input_error(show_birthday(&["Bob"], &book)),
      text("Bob's birthday: No birthday set")
    );

    let reply = run(&mut book, add_birthday, &["Bob", "01.07.1985"]);
    assert_eq!(reply, text("Bob's birthday: 01.07.1985"));
    assert_eq!(
      input_error(show_birthday(&["Bob"], &book)),
      text("Bob's birthday: 01.07.1985")
    );
  }

  #[test]
  fn add_birthday_errors() {
    let mut book = book_with_alice();
    assert_eq!(
      run(&mut book, add_birthday, &["Ghost", "01.07.1985"]),
      text(NAME_NOT_FOUND)
    );
    assert_eq!(run(&mut book, add_birthday, &["Alice"]), text(INDEX_ERROR));
    assert_eq!(run(&mut book, add_birthday, &["Alice", "July"]), text(WRONG_INPUT));
    assert_eq!(book.find("Alice").unwrap().get_birthday(), "15.06.1990");
  }

  #[test]
  fn upcoming_birthdays_reply() {
    let mut book = book_with_alice();
    run(&mut book, add_contact, &["Bob", "0671112233", "01.07.1985"]);

    let reply = input_error(birthdays(&[], &book, date(2024, 6, 1)));
    assert_eq!(
      reply,
      Reply::Upcoming(vec![
        UpcomingBirthday {
          name:       "Alice".into(),
          birthday:   date(2024, 6, 15),
          days_until: 14,
        },
        UpcomingBirthday {
          name:       "Bob".into(),
          birthday:   date(2024, 7, 1),
          days_until: 30,
        },
      ])
    );
    assert_eq!(
      reply.render(),
      "Alice: 2024-06-15 (in 14 days)\nBob: 2024-07-01 (in 30 days)"
    );
  }

  #[test]
  fn no_upcoming_birthdays() {
    let book = book_with_alice();
    assert_eq!(
      input_error(birthdays(&[], &book, date(2024, 1, 1))),
      text(NO_UPCOMING)
    );
  }

  // ─── misc ──────────────────────────────────────────────────────────────────

  #[test]
  fn hello_and_all() {
    assert_eq!(input_error(hello(&[])), text("How can I help you?"));
    assert_eq!(input_error(hello(&["there"])), text(WRONG_INPUT));

    let empty = AddressBook::new();
    assert_eq!(input_error(show_all(&[], &empty)), text(NO_CONTACTS));

    let mut book = book_with_alice();
    run(&mut book, add_contact, &["Bob", "0671112233"]);
    assert_eq!(
      input_error(show_all(&[], &book)).render(),
      "Alice      | phone: 0501234567 | birthday: 15.06.1990\n\
       Bob        | phone: 0671112233 | birthday: No birthday set"
    );
  }
}
