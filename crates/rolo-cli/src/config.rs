//! Runtime settings, layered from defaults, an optional TOML file and
//! `ROLO_*` environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_DATA_PATH: &str = "addressbook.json";
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Settings for one `rolo` session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Where the address book is persisted. A leading `~/` is expanded.
  pub data_path: PathBuf,
  /// Text printed before each command is read.
  pub prompt:    String,
}

impl Settings {
  /// Build settings from `file` (if it exists) and the environment.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    let settings: Settings = config::Config::builder()
      .set_default("data_path", DEFAULT_DATA_PATH)?
      .set_default("prompt", DEFAULT_PROMPT)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ROLO"))
      .build()?
      .try_deserialize()?;

    Ok(Self {
      data_path: expand_tilde(&settings.data_path),
      ..settings
    })
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
