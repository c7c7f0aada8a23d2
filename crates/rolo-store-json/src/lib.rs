//! JSON file backend for the rolo address book.
//!
//! The whole book is written as one self-describing JSON document. Every load
//! and save opens the file, does a single whole-state read or write, and
//! closes it again.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonFileStore;
