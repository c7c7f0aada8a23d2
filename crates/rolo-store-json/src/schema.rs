//! On-disk document layout.
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice", "phones": ["0501234567"], "birthday": "15.06.1990" }
//!   ]
//! }
//! ```
//!
//! Records are listed in address-book order. Bump [`FORMAT_VERSION`] whenever
//! the layout changes incompatibly.

use rolo_core::Record;
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: u32 = 1;

/// Only the version field; read first so an unknown layout is reported as
/// such instead of as a confusing field error.
#[derive(Deserialize)]
pub struct Header {
  pub version: u32,
}

#[derive(Serialize)]
pub struct DocumentRef<'a> {
  pub version: u32,
  pub records: Vec<&'a Record>,
}

/// The full document, read once [`Header`] has been checked.
#[derive(Deserialize)]
pub struct Document {
  pub records: Vec<Record>,
}
