//! Date filter: select people whose next lesson falls on a given day.
//!
//! Parsing pipeline for the user-supplied date:
//!   trim → shape `d/M/yyyy` → calendar validity → not in the past
//!     → not more than one year ahead
//!
//! Only the first failing check is reported.

use std::sync::LazyLock;

use chrono::{Local, Months, NaiveDate};
use regex::Regex;

pub use crate::error::{
  FILTER_DATE_USAGE, MESSAGE_DATE_CALENDAR, MESSAGE_DATE_FORMAT,
  MESSAGE_DATE_FUTURE_WINDOW, MESSAGE_DATE_PAST,
};
use crate::{Error, Result, person::Person};

static FILTER_DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$")
    .expect("filter date pattern")
});

// ─── Predicate ───────────────────────────────────────────────────────────────

/// Matches people whose next lesson is scheduled on exactly `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextLessonOnDate {
  date: NaiveDate,
}

impl NextLessonOnDate {
  pub fn new(date: NaiveDate) -> Self { Self { date } }

  pub fn date(&self) -> NaiveDate { self.date }

  /// Unscheduled lessons never match.
  pub fn matches(&self, person: &Person) -> bool {
    person.next_lesson().date() == Some(self.date)
  }
}

// ─── Parser ──────────────────────────────────────────────────────────────────

/// Parse a filter date relative to the local calendar date.
///
/// The clock is read exactly once per call.
pub fn parse_filter_date(args: &str) -> Result<NextLessonOnDate> {
  parse_filter_date_on(args, Local::now().date_naive())
}

/// Parse a filter date relative to `today`.
pub fn parse_filter_date_on(
  args: &str,
  today: NaiveDate,
) -> Result<NextLessonOnDate> {
  let trimmed = args.trim();
  if trimmed.is_empty() {
    return Err(Error::EmptyArgument);
  }

  let caps = FILTER_DATE_SHAPE
    .captures(trimmed)
    .ok_or(Error::DateFormat)?;

  // Fields are at most four ASCII digits, so these parses cannot overflow.
  let (Ok(day), Ok(month), Ok(year)) = (
    caps[1].parse::<u32>(),
    caps[2].parse::<u32>(),
    caps[3].parse::<i32>(),
  ) else {
    return Err(Error::DateFormat);
  };

  let date =
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::DateCalendar)?;

  if date < today {
    return Err(Error::DatePast);
  }

  if today
    .checked_add_months(Months::new(12))
    .is_some_and(|limit| date > limit)
  {
    return Err(Error::DateFutureWindow);
  }

  Ok(NextLessonOnDate::new(date))
}
