//! The next scheduled lesson with a person.
//!
//! A lesson is either unscheduled or has a date plus a start/end time. The
//! canonical text form is `dd/MM/yyyy HHmm-HHmm`, e.g. `15/06/2025 1900-2100`;
//! an unscheduled lesson is the empty string. Years outside `0000..=9999`
//! carry an explicit sign, e.g. `01/01/+10000`.

use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{NaiveDate, NaiveTime, Timelike};
use regex::Regex;

use crate::{Error, Result};

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4}|[+-][0-9]{4,})$")
    .expect("date pattern")
});

static TIME_RANGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([0-9]{2})([0-9]{2})-([0-9]{2})([0-9]{2})$")
    .expect("time range pattern")
});

/// When the next lesson with a person takes place.
///
/// `start < end` is not checked here; callers that schedule lessons from user
/// input are expected to apply that rule themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NextLesson {
  #[default]
  Unscheduled,
  Scheduled {
    date:  NaiveDate,
    start: NaiveTime,
    end:   NaiveTime,
  },
}

impl NextLesson {
  pub const CONSTRAINTS: &'static str = "Next lesson should be in the format \
                                         dd/MM/yyyy HHmm-HHmm, e.g. \
                                         15/06/2025 1900-2100";
  pub const TYPE_NAME: &'static str = "NextLesson";

  /// Parse the canonical text form. A blank string yields
  /// [`NextLesson::Unscheduled`].
  pub fn parse(value: &str) -> Result<Self> {
    if value.trim().is_empty() {
      return Ok(Self::Unscheduled);
    }

    let mut tokens = value.split_whitespace();
    let (Some(date), Some(range), None) =
      (tokens.next(), tokens.next(), tokens.next())
    else {
      return Err(Error::malformed(Self::CONSTRAINTS));
    };

    let date = parse_date_token(date)?;
    let (start, end) = parse_time_range_token(range)?;
    Ok(Self::Scheduled { date, start, end })
  }

  /// Build a scheduled lesson from typed parts. Never fails.
  ///
  /// Times are truncated to whole minutes, the precision of the text form.
  pub fn scheduled(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
    Self::Scheduled {
      date,
      start: whole_minutes(start),
      end: whole_minutes(end),
    }
  }

  pub fn is_empty(&self) -> bool { matches!(self, Self::Unscheduled) }

  /// The lesson date, or `None` when unscheduled.
  pub fn date(&self) -> Option<NaiveDate> {
    match self {
      Self::Scheduled { date, .. } => Some(*date),
      Self::Unscheduled => None,
    }
  }

  pub fn start_time(&self) -> Option<NaiveTime> {
    match self {
      Self::Scheduled { start, .. } => Some(*start),
      Self::Unscheduled => None,
    }
  }

  pub fn end_time(&self) -> Option<NaiveTime> {
    match self {
      Self::Scheduled { end, .. } => Some(*end),
      Self::Unscheduled => None,
    }
  }
}

fn parse_date_token(token: &str) -> Result<NaiveDate> {
  let caps = DATE_TOKEN
    .captures(token)
    .ok_or_else(|| Error::malformed(NextLesson::CONSTRAINTS))?;
  let (Ok(day), Ok(month), Ok(year)) = (
    caps[1].parse::<u32>(),
    caps[2].parse::<u32>(),
    caps[3].parse::<i32>(),
  ) else {
    return Err(Error::malformed(NextLesson::CONSTRAINTS));
  };
  // A sign is only written for years that do not fit in four digits.
  let signed = caps[3].starts_with(['+', '-']);
  if signed && (0..=9999).contains(&year) {
    return Err(Error::malformed(NextLesson::CONSTRAINTS));
  }
  NaiveDate::from_ymd_opt(year, month, day)
    .ok_or_else(|| Error::malformed(NextLesson::CONSTRAINTS))
}

fn parse_time_range_token(token: &str) -> Result<(NaiveTime, NaiveTime)> {
  let caps = TIME_RANGE_TOKEN
    .captures(token)
    .ok_or_else(|| Error::malformed(NextLesson::CONSTRAINTS))?;
  let time = |h: usize, m: usize| -> Option<NaiveTime> {
    let hour = caps[h].parse::<u32>().ok()?;
    let minute = caps[m].parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
  };
  match (time(1, 2), time(3, 4)) {
    (Some(start), Some(end)) => Ok((start, end)),
    _ => Err(Error::malformed(NextLesson::CONSTRAINTS)),
  }
}

fn whole_minutes(time: NaiveTime) -> NaiveTime {
  NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

impl fmt::Display for NextLesson {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unscheduled => Ok(()),
      Self::Scheduled { date, start, end } => write!(
        f,
        "{} {}-{}",
        date.format("%d/%m/%Y"),
        start.format("%H%M"),
        end.format("%H%M")
      ),
    }
  }
}

impl FromStr for NextLesson {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}
