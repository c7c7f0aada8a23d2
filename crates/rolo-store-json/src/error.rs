//! Error type for `rolo-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read {path}: {source}")]
  Read {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("cannot write {path}: {source}")]
  Write {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unsupported data format version {found} (expected {expected})")]
  UnsupportedVersion { found: u32, expected: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
