//! [`JsonFileStore`] — the JSON file implementation of [`BookStore`].

use std::{
  fs,
  io::{self, Write as _},
  path::{Path, PathBuf},
};

use rolo_core::{AddressBook, store::BookStore};
use tracing::{debug, info};

use crate::{
  Error, Result,
  encode::{decode_book, encode_book},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  /// A store backed by `path`. Nothing is touched until the first
  /// [`load`](BookStore::load) or [`save`](BookStore::save).
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  /// Sibling file the next save is staged in before being renamed into place.
  fn staging_path(&self) -> PathBuf {
    let mut name = self
      .path
      .file_name()
      .map(|n| n.to_os_string())
      .unwrap_or_else(|| "addressbook".into());
    name.push(".tmp");
    self.path.with_file_name(name)
  }
}

fn write_err(path: &Path) -> impl FnOnce(io::Error) -> Error + use<> {
  let path = path.to_path_buf();
  move |source| Error::Write { path, source }
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for JsonFileStore {
  type Error = Error;

  fn load(&self) -> Result<AddressBook> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        info!(path = %self.path.display(), "no address book yet, starting empty");
        return Ok(AddressBook::new());
      }
      Err(source) => {
        return Err(Error::Read {
          path: self.path.clone(),
          source,
        });
      }
    };

    let book = decode_book(&raw)?;
    info!(path = %self.path.display(), records = book.len(), "loaded address book");
    Ok(book)
  }

  fn save(&self, book: &AddressBook) -> Result<()> {
    let encoded = encode_book(book)?;

    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(write_err(parent))?;
    }

    // Stage the write so a failure part-way never truncates the last good
    // copy.
    let staging = self.staging_path();
    {
      let mut file = fs::File::create(&staging).map_err(write_err(&staging))?;
      file
        .write_all(encoded.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(write_err(&staging))?;
    }
    debug!(staging = %staging.display(), "staged address book");

    fs::rename(&staging, &self.path).map_err(write_err(&self.path))?;
    info!(path = %self.path.display(), records = book.len(), "saved address book");
    Ok(())
  }
}
