//! Conversion between an [`AddressBook`] and its JSON document.

use rolo_core::AddressBook;
use tracing::warn;

use crate::{
  Error, Result,
  schema::{Document, DocumentRef, FORMAT_VERSION, Header},
};

pub fn encode_book(book: &AddressBook) -> Result<String> {
  let doc = DocumentRef {
    version: FORMAT_VERSION,
    records: book.iter().collect(),
  };
  Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn decode_book(s: &str) -> Result<AddressBook> {
  let header: Header = serde_json::from_str(s)?;
  if header.version != FORMAT_VERSION {
    return Err(Error::UnsupportedVersion {
      found:    header.version,
      expected: FORMAT_VERSION,
    });
  }

  let doc: Document = serde_json::from_str(s)?;
  // Rebuilding through `add_record` keeps keys and record names in step.
  let mut book = AddressBook::new();
  for record in doc.records {
    if book.find(record.name()).is_some() {
      warn!(
        name = record.name(),
        "duplicate name in address book file; keeping the later record"
      );
    }
    book.add_record(record);
  }
  Ok(book)
}
