//! The `BookStore` trait — the persistence seam for an [`AddressBook`].
//!
//! Implemented by storage backends (e.g. `rolo-store-json`). The CLI depends
//! on this abstraction, not on any concrete backend.

use crate::book::AddressBook;

/// Whole-state persistence for an [`AddressBook`].
///
/// Backends read and write the complete book in one operation; nothing is held
/// open between calls.
pub trait BookStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the persisted book. A store that has never been saved yields an
  /// empty book rather than an error.
  fn load(&self) -> Result<AddressBook, Self::Error>;

  /// Replace the persisted state with `book`.
  fn save(&self, book: &AddressBook) -> Result<(), Self::Error>;
}
