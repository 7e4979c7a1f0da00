//! Error types for the tutorbook-json adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A record was missing a field or carried a malformed value.
  #[error(transparent)]
  Model(#[from] tutorbook_core::Error),

  #[error("Persons list contains duplicate person(s).")]
  DuplicatePerson,

  #[error("invalid JSON")]
  Json(#[from] serde_json::Error),

  #[error("I/O error on {path}")]
  Io {
    path:   String,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
