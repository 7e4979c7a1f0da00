//! Error types for `tutorbook-core`.
//!
//! Every variant represents rejected input. The `Display` output of each
//! variant is the exact message shown to the user.

use thiserror::Error;

// ─── Messages ─────────────────────────────────────────────────────────────────

pub const MESSAGE_SUBJECT_CONSTRAINTS: &str =
  "Subject names should be alphanumeric. \nTo add multiple subjects, specify \
   's/' before each subject separately. \nExample: s/math s/chemistry \
   s/physics";

pub const FILTER_DATE_USAGE: &str = "filter-date: Lists all persons whose \
                                     next lesson falls on the given date.\n\
                                     Parameters: DATE (d/M/yyyy)\n\
                                     Example: filter-date 20/6/2025";

pub const MESSAGE_DATE_FORMAT: &str =
  "Invalid date format. Please use d/M/yyyy, e.g. 20/6/2025";
pub const MESSAGE_DATE_CALENDAR: &str =
  "Invalid date. Please enter a date that exists in the calendar.";
pub const MESSAGE_DATE_PAST: &str = "Date cannot be in the past.";
pub const MESSAGE_DATE_FUTURE_WINDOW: &str =
  "Date cannot be more than 1 year from today.";

// ─── Error ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A value type's format rule failed; carries that type's constraint
  /// message.
  #[error("{message}")]
  MalformedValue { message: &'static str },

  /// A required field was absent; carries the field's type name.
  #[error("Person's {0} field is missing!")]
  MissingField(&'static str),

  /// A subject entry failed the subject format rule.
  #[error("{}", MESSAGE_SUBJECT_CONSTRAINTS)]
  InvalidSubjectSet { rejected: String },

  #[error("{}", MESSAGE_DATE_FORMAT)]
  DateFormat,

  #[error("{}", MESSAGE_DATE_CALENDAR)]
  DateCalendar,

  #[error("{}", MESSAGE_DATE_PAST)]
  DatePast,

  #[error("{}", MESSAGE_DATE_FUTURE_WINDOW)]
  DateFutureWindow,

  #[error("Invalid command format! \n{}", FILTER_DATE_USAGE)]
  EmptyArgument,
}

impl Error {
  pub(crate) fn malformed(message: &'static str) -> Self {
    Self::MalformedValue { message }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
