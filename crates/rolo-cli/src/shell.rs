//! The interactive shell: line parsing, command dispatch and the read loop.

use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use chrono::Local;
use rolo_core::{AddressBook, store::BookStore};
use strum::EnumString;
use tracing::debug;

use crate::handlers::{self, input_error};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

// ─── Commands ─────────────────────────────────────────────────────────────────

/// The fixed command set; the first token of a line, matched without regard
/// to ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Command {
  Hello,
  Add,
  Change,
  Phone,
  All,
  ShowBirthday,
  Birthdays,
  AddBirthday,
  #[strum(serialize = "close", serialize = "exit")]
  Exit,
}

/// Split a line into its command token and positional arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
  let mut tokens = line.split_whitespace();
  let command = tokens.next()?;
  Some((command, tokens.collect()))
}

// ─── Shell ────────────────────────────────────────────────────────────────────

/// Result of executing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
  /// Print the reply and read the next line.
  Reply(String),
  /// Nothing to print.
  Skip,
  /// The user asked to leave.
  Exit,
}

/// An address book loaded from `S`, driven one command line at a time.
pub struct Shell<S: BookStore> {
  store:  S,
  book:   AddressBook,
  prompt: String,
}

impl<S: BookStore> Shell<S> {
  /// Load the book from `store`.
  pub fn open(store: S, prompt: impl Into<String>) -> Result<Self, S::Error> {
    let book = store.load()?;
    Ok(Self {
      store,
      book,
      prompt: prompt.into(),
    })
  }

  pub fn book(&self) -> &AddressBook { &self.book }

  /// Parse and run one command line against the book.
  pub fn execute(&mut self, line: &str) -> Step {
    let Some((token, args)) = parse_input(line) else {
      return Step::Skip;
    };
    let Ok(command) = token.parse::<Command>() else {
      debug!(token, "unknown command");
      return Step::Reply(INVALID_COMMAND.to_owned());
    };
    debug!(?command, args = args.len(), "dispatching");

    let book = &mut self.book;
    let result = match command {
      Command::Exit => return Step::Exit,
      Command::Hello => handlers::hello(&args),
      Command::Add => handlers::add_contact(&args, book),
      Command::Change => handlers::change_contact(&args, book),
      Command::Phone => handlers::phone(&args, book),
      Command::All => handlers::show_all(&args, book),
      Command::ShowBirthday => handlers::show_birthday(&args, book),
      Command::AddBirthday => handlers::add_birthday(&args, book),
      Command::Birthdays => {
        handlers::birthdays(&args, book, Local::now().date_naive())
      }
    };
    Step::Reply(input_error(result).render())
  }

  /// Persist the book.
  pub fn save(&self) -> Result<(), S::Error> { self.store.save(&self.book) }

  /// Run the read loop until `close`/`exit` or end of input, then save.
  ///
  /// Handler failures are printed and the loop continues. An I/O failure ends
  /// the loop early, but the book is saved before it is reported.
  pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()>
  where
    R: BufRead,
    W: Write,
  {
    let looped = self.read_loop(&mut input, &mut output);
    let saved = self.save().context("saving address book");
    looped.context("reading commands")?;
    saved?;
    Ok(())
  }

  // Lines are decoded lossily so a stray non-UTF-8 byte becomes an ordinary
  // bad argument instead of ending the session.
  fn read_loop<R, W>(&mut self, input: &mut R, output: &mut W) -> io::Result<()>
  where
    R: BufRead,
    W: Write,
  {
    writeln!(output, "{WELCOME}")?;

    let mut buf = Vec::new();
    loop {
      write!(output, "{}", self.prompt)?;
      output.flush()?;

      buf.clear();
      if input.read_until(b'\n', &mut buf)? == 0 {
        debug!("end of input");
        writeln!(output)?;
        break;
      }

      match self.execute(&String::from_utf8_lossy(&buf)) {
        Step::Reply(text) => writeln!(output, "{text}")?,
        Step::Skip => {}
        Step::Exit => break,
      }
    }

    writeln!(output, "{GOODBYE}")
  }
}
