//! Application state and command handlers.
//!
//! Each handler takes raw user strings, builds domain objects from them and
//! returns the text to print. Domain errors are passed through untouched so
//! their messages reach the user verbatim.

use anyhow::{Context, Result, bail};
use clap::Args;
use tutorbook_core::{
  filter::{self, NextLessonOnDate},
  lesson::NextLesson,
  person::{Person, PersonBuilder},
  subject::Subject,
  value::{Address, Email, Name, PayStatus, Phone},
};
use tutorbook_json::JsonStorage;

pub const MESSAGE_DUPLICATE_PERSON: &str =
  "This person already exists in the address book";
pub const MESSAGE_INVALID_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_LESSON_ORDER: &str =
  "Lesson start time must be before its end time";
pub const MESSAGE_NOTHING_TO_EDIT: &str =
  "At least one field to edit must be provided.";

// ─── Command inputs ───────────────────────────────────────────────────────────

/// Raw fields for a new person.
#[derive(Args, Debug, Clone, Default)]
pub struct NewPerson {
  #[arg(long)]
  pub name: String,

  #[arg(long)]
  pub phone: String,

  #[arg(long)]
  pub email: String,

  #[arg(long)]
  pub address: String,

  /// Next lesson as `dd/MM/yyyy HHmm-HHmm`; omit to leave unscheduled.
  #[arg(long, value_name = "LESSON")]
  pub lesson: Option<String>,

  /// Free-text payment status.
  #[arg(long = "pay", value_name = "STATUS")]
  pub pay_status: Option<String>,

  /// A subject taught; repeat for several.
  #[arg(long = "subject", value_name = "SUBJECT")]
  pub subjects: Vec<String>,
}

/// Raw replacement fields for an existing person. Absent fields are kept.
#[derive(Args, Debug, Clone, Default)]
pub struct PersonEdit {
  #[arg(long)]
  pub name: Option<String>,

  #[arg(long)]
  pub phone: Option<String>,

  #[arg(long)]
  pub email: Option<String>,

  #[arg(long)]
  pub address: Option<String>,

  /// Next lesson as `dd/MM/yyyy HHmm-HHmm`; an empty value unschedules it.
  #[arg(long, value_name = "LESSON")]
  pub lesson: Option<String>,

  #[arg(long = "pay", value_name = "STATUS")]
  pub pay_status: Option<String>,

  /// Replaces all subjects; repeat for several.
  #[arg(long = "subject", value_name = "SUBJECT")]
  pub subjects: Vec<String>,

  /// Remove every subject.
  #[arg(long, conflicts_with = "subjects")]
  pub clear_subjects: bool,
}

impl PersonEdit {
  fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.phone.is_none()
      && self.email.is_none()
      && self.address.is_none()
      && self.lesson.is_none()
      && self.pay_status.is_none()
      && self.subjects.is_empty()
      && !self.clear_subjects
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// The loaded address book plus where to save it.
pub struct App {
  storage: JsonStorage,
  persons: Vec<Person>,
}

impl App {
  /// Load the address book behind `storage`; a missing file is an empty book.
  pub fn load(storage: JsonStorage) -> Result<Self> {
    let persons = storage.read()?.unwrap_or_else(|| {
      tracing::info!(
        path = %storage.path().display(),
        "no data file, starting with an empty address book"
      );
      Vec::new()
    });
    Ok(Self { storage, persons })
  }

  pub fn persons(&self) -> &[Person] { &self.persons }

  pub fn list(&self) -> String {
    let persons = self.persons();
    if persons.is_empty() {
      return "No persons in the address book.".to_string();
    }
    render_numbered(persons.iter())
  }

  pub fn add(&mut self, input: NewPerson) -> Result<String> {
    let person = Person::builder()
      .name(Name::parse(&input.name)?)
      .phone(Phone::parse(&input.phone)?)
      .email(Email::parse(&input.email)?)
      .address(Address::parse(&input.address)?)
      .next_lesson(parse_lesson(input.lesson.as_deref().unwrap_or(""))?)
      .pay_status(PayStatus::new(input.pay_status.unwrap_or_default()))
      .subjects(parse_subjects(&input.subjects)?)
      .build()?;

    if self.persons.iter().any(|p| p.is_same_person(&person)) {
      bail!(MESSAGE_DUPLICATE_PERSON);
    }

    let message = format!("New person added: {}", describe(&person));
    self.persons.push(person);
    self.save()?;
    Ok(message)
  }

  /// Replace fields of the person at 1-based `index`.
  pub fn edit(&mut self, index: usize, edit: PersonEdit) -> Result<String> {
    let Some(slot) = index.checked_sub(1).filter(|&i| i < self.persons.len())
    else {
      bail!(MESSAGE_INVALID_INDEX);
    };
    if edit.is_empty() {
      bail!(MESSAGE_NOTHING_TO_EDIT);
    }

    let edited = apply_edit(self.persons[slot].to_builder(), edit)?.build()?;

    let clashes = self
      .persons
      .iter()
      .enumerate()
      .any(|(i, p)| i != slot && p.is_same_person(&edited));
    if clashes {
      bail!(MESSAGE_DUPLICATE_PERSON);
    }

    let message = format!("Edited person: {}", describe(&edited));
    self.persons[slot] = edited;
    self.save()?;
    Ok(message)
  }

  /// List people whose next lesson falls on the date in `args`.
  pub fn filter_date(&self, args: &str) -> Result<String> {
    let predicate = filter::parse_filter_date(args)?;
    Ok(self.render_filtered(&predicate))
  }

  fn render_filtered(&self, predicate: &NextLessonOnDate) -> String {
    let matches: Vec<&Person> =
      self.persons.iter().filter(|p| predicate.matches(p)).collect();
    tracing::debug!(
      date = %predicate.date(),
      count = matches.len(),
      "filtered by next lesson date"
    );

    let summary = format!("{} persons listed!", matches.len());
    if matches.is_empty() {
      summary
    } else {
      format!("{}\n{summary}", render_numbered(matches.into_iter()))
    }
  }

  fn save(&self) -> Result<()> {
    self
      .storage
      .save(&self.persons)
      .with_context(|| format!("saving {}", self.storage.path().display()))
  }
}

// ─── Parsing helpers ──────────────────────────────────────────────────────────

/// Parse a lesson from user input, additionally requiring `start < end`.
fn parse_lesson(raw: &str) -> Result<NextLesson> {
  let lesson = NextLesson::parse(raw)?;
  if let (Some(start), Some(end)) = (lesson.start_time(), lesson.end_time())
    && start >= end
  {
    bail!(MESSAGE_LESSON_ORDER);
  }
  Ok(lesson)
}

fn parse_subjects(raw: &[String]) -> Result<Vec<Subject>> {
  let subjects = raw
    .iter()
    .map(|s| Subject::parse(s))
    .collect::<tutorbook_core::Result<Vec<_>>>()?;
  Ok(subjects)
}

fn apply_edit(
  mut builder: PersonBuilder,
  edit: PersonEdit,
) -> Result<PersonBuilder> {
  if let Some(name) = &edit.name {
    builder = builder.name(Name::parse(name)?);
  }
  if let Some(phone) = &edit.phone {
    builder = builder.phone(Phone::parse(phone)?);
  }
  if let Some(email) = &edit.email {
    builder = builder.email(Email::parse(email)?);
  }
  if let Some(address) = &edit.address {
    builder = builder.address(Address::parse(address)?);
  }
  if let Some(lesson) = &edit.lesson {
    builder = builder.next_lesson(parse_lesson(lesson)?);
  }
  if let Some(pay_status) = edit.pay_status {
    builder = builder.pay_status(PayStatus::new(pay_status));
  }
  if edit.clear_subjects {
    builder = builder.subjects(Vec::<Subject>::new());
  } else if !edit.subjects.is_empty() {
    builder = builder.subjects(parse_subjects(&edit.subjects)?);
  }
  Ok(builder)
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn render_numbered<'a>(persons: impl Iterator<Item = &'a Person>) -> String {
  persons
    .enumerate()
    .map(|(i, p)| format!("{}. {}", i + 1, describe(p)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// One-line summary of a person.
pub fn describe(person: &Person) -> String {
  let lesson = match person.next_lesson() {
    NextLesson::Unscheduled => "-".to_string(),
    scheduled => scheduled.to_string(),
  };
  let subjects: String = person
    .subjects()
    .iter()
    .map(|s| format!("[{s}]"))
    .collect();
  format!(
    "{}; Phone: {}; Email: {}; Address: {}; Next lesson: {}; Pay status: {}; \
     Subjects: {}",
    person.name(),
    person.phone(),
    person.email(),
    person.address(),
    lesson,
    person.pay_status(),
    subjects
  )
}
