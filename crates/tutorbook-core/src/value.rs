//! Self-validating scalar value types that make up a [`Person`].
//!
//! Each type wraps a single string, validates it once on construction and is
//! immutable afterwards. Equality and hashing are by the wrapped string.
//!
//! [`Person`]: crate::person::Person

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{Error, Result};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern")
});

static PHONE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern"));

static ADDRESS_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\S.*$").expect("address pattern"));

// local-part: alphanumeric runs joined by single special characters.
// domain: hyphenated labels separated by periods, last label >= 2 chars.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(concat!(
    r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*",
    r"@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*",
    r"(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*){2,}$",
  ))
  .expect("email pattern")
});

fn validate(
  pattern: &Regex,
  value: &str,
  message: &'static str,
) -> Result<String> {
  if pattern.is_match(value) {
    Ok(value.to_string())
  } else {
    Err(Error::malformed(message))
  }
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// A person's name: alphanumeric characters and spaces, not starting with a
/// space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
  pub const CONSTRAINTS: &'static str = "Names should only contain \
                                         alphanumeric characters and spaces, \
                                         and it should not be blank";
  pub const TYPE_NAME: &'static str = "Name";

  pub fn parse(value: &str) -> Result<Self> {
    validate(&NAME_PATTERN, value, Self::CONSTRAINTS).map(Self)
  }

  pub fn is_valid(value: &str) -> bool { NAME_PATTERN.is_match(value) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Name {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A phone number: at least three ASCII digits, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
  pub const CONSTRAINTS: &'static str = "Phone numbers should only contain \
                                         numbers, and it should be at least 3 \
                                         digits long";
  pub const TYPE_NAME: &'static str = "Phone";

  pub fn parse(value: &str) -> Result<Self> {
    validate(&PHONE_PATTERN, value, Self::CONSTRAINTS).map(Self)
  }

  pub fn is_valid(value: &str) -> bool { PHONE_PATTERN.is_match(value) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Phone {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// An email address of the shape `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
  pub const CONSTRAINTS: &'static str = "Emails should be of the format \
    local-part@domain and adhere to the following constraints:\n\
    1. The local-part should only contain alphanumeric characters and these \
    special characters, excluding the parentheses, (+_.-). The local-part may \
    not start or end with any special characters.\n\
    2. This is followed by a '@' and then a domain name. The domain name is \
    made up of domain labels separated by periods.\n\
    The domain name must:\n    \
    - end with a domain label at least 2 characters long\n    \
    - have each domain label start and end with alphanumeric characters\n    \
    - have each domain label consist of alphanumeric characters, separated \
    only by hyphens, if any.";
  pub const TYPE_NAME: &'static str = "Email";

  pub fn parse(value: &str) -> Result<Self> {
    validate(&EMAIL_PATTERN, value, Self::CONSTRAINTS).map(Self)
  }

  pub fn is_valid(value: &str) -> bool { EMAIL_PATTERN.is_match(value) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Email {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// A free-form postal address. Must not be blank or start with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
  pub const CONSTRAINTS: &'static str =
    "Addresses can take any values, and it should not be blank";
  pub const TYPE_NAME: &'static str = "Address";

  pub fn parse(value: &str) -> Result<Self> {
    validate(&ADDRESS_PATTERN, value, Self::CONSTRAINTS).map(Self)
  }

  pub fn is_valid(value: &str) -> bool { ADDRESS_PATTERN.is_match(value) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

// ─── PayStatus ───────────────────────────────────────────────────────────────

/// Free-text payment note (e.g. "paid", "owes $40"). May be empty; never
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PayStatus(String);

impl PayStatus {
  pub const TYPE_NAME: &'static str = "PayStatus";

  pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl fmt::Display for PayStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for PayStatus {
  fn from(value: &str) -> Self { Self::new(value) }
}
