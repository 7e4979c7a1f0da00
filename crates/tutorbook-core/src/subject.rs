//! A topic taught to a person, e.g. `math` or `chemistry`.
//!
//! Subjects are case-insensitive: the name is lower-cased on construction so
//! that `Math` and `math` are the same member of a person's subject set.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{Error, Result, error::MESSAGE_SUBJECT_CONSTRAINTS};

static SUBJECT_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("subject pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subject(String);

impl Subject {
  pub const CONSTRAINTS: &'static str = MESSAGE_SUBJECT_CONSTRAINTS;

  /// Validate `value` and store it lower-cased.
  pub fn parse(value: &str) -> Result<Self> {
    if Self::is_valid(value) {
      Ok(Self(value.to_ascii_lowercase()))
    } else {
      Err(Error::malformed(Self::CONSTRAINTS))
    }
  }

  pub fn is_valid(value: &str) -> bool { SUBJECT_PATTERN.is_match(value) }

  /// The normalised (lower-case) subject name.
  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Subject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Subject {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}
