//! `rolo` — interactive address book.
//!
//! # Usage
//!
//! ```text
//! rolo
//! rolo --data-file ~/contacts.json
//! rolo --config ~/.config/rolo/rolo.toml --verbose
//! ```
//!
//! Commands are read from stdin one per line; replies go to stdout and logs
//! to stderr.

mod config;
mod handlers;
mod shell;

use std::{io, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use rolo_store_json::JsonFileStore;
use shell::Shell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{Settings, expand_tilde};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive address book with birthday reminders")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rolo.toml")]
  config: PathBuf,

  /// Address book file; overrides `data_path` from the configuration.
  #[arg(short, long, value_name = "FILE", env = "ROLO_DATA_FILE")]
  data_file: Option<PathBuf>,

  /// Log at debug level unless RUST_LOG says otherwise.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose {
    LevelFilter::DEBUG
  } else {
    LevelFilter::WARN
  };
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy(),
    )
    .init();

  let mut settings = Settings::load(&cli.config)
    .with_context(|| format!("failed to read config {}", cli.config.display()))?;
  if let Some(path) = cli.data_file {
    settings.data_path = expand_tilde(&path);
  }
  tracing::debug!(?settings, "settings loaded");

  let store = JsonFileStore::new(&settings.data_path);
  let mut shell = Shell::open(store, settings.prompt).with_context(|| {
    format!("failed to load address book from {}", settings.data_path.display())
  })?;
  tracing::info!(records = shell.book().len(), "address book ready");

  shell.run(io::stdin().lock(), io::stdout().lock())
}
