//! File-backed storage for the address book.

use std::{
  fs,
  io::ErrorKind,
  path::{Path, PathBuf},
};

use tutorbook_core::person::Person;

use crate::{
  book::JsonAddressBook,
  error::{Error, Result},
};

/// Reads and writes the address book as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
  path: PathBuf,
}

impl JsonStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  /// Load every person from disk. Returns `Ok(None)` when the file does not
  /// exist yet.
  pub fn read(&self) -> Result<Option<Vec<Person>>> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::debug!(path = %self.path.display(), "data file not found");
        return Ok(None);
      }
      Err(source) => return Err(self.io_error(source)),
    };

    let book: JsonAddressBook = serde_json::from_str(&raw)?;
    let persons = book.to_persons().inspect_err(|e| {
      tracing::warn!(path = %self.path.display(), "rejected data file: {e}");
    })?;

    tracing::info!(
      path = %self.path.display(),
      count = persons.len(),
      "loaded address book"
    );
    Ok(Some(persons))
  }

  /// Overwrite the file with `persons`, creating parent directories as
  /// needed.
  pub fn save(&self, persons: &[Person]) -> Result<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
    }

    let json =
      serde_json::to_string_pretty(&JsonAddressBook::from_persons(persons))?;
    fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

    tracing::info!(
      path = %self.path.display(),
      count = persons.len(),
      "saved address book"
    );
    Ok(())
  }

  fn io_error(&self, source: std::io::Error) -> Error {
    Error::Io {
      path: self.path.display().to_string(),
      source,
    }
  }
}
