//! Layered configuration: TOML file, then `TUTORBOOK_*` environment
//! variables. Command-line flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Where the address book JSON file lives.
  #[serde(default = "default_data_path")]
  pub data_path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("data/tutorbook.json") }

impl Settings {
  pub fn load(config_file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(config_file.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("TUTORBOOK"))
      .build()
      .with_context(|| {
        format!("failed to read config file {}", config_file.display())
      })?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}
