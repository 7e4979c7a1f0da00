//! Flat, string-only representation of a [`Person`] for JSON storage.
//!
//! Serialising copies each field's canonical string. Deserialising rebuilds
//! each value type and stops at the first failure: a missing field becomes
//! [`Error::MissingField`], a malformed one propagates the value type's own
//! error, and any bad subject rejects the whole record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tutorbook_core::{
  Error, Result,
  lesson::NextLesson,
  person::Person,
  subject::Subject,
  value::{Address, Email, Name, PayStatus, Phone},
};

/// One person as stored on disk. `None` means the key was absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPerson {
  pub name:        Option<String>,
  pub phone:       Option<String>,
  pub email:       Option<String>,
  pub address:     Option<String>,
  pub next_lesson: Option<String>,
  pub pay_status:  Option<String>,
  #[serde(default)]
  pub subjects:    Vec<String>,
}

impl From<&Person> for JsonPerson {
  fn from(person: &Person) -> Self {
    Self {
      name:        Some(person.name().to_string()),
      phone:       Some(person.phone().to_string()),
      email:       Some(person.email().to_string()),
      address:     Some(person.address().to_string()),
      // Unscheduled lessons display as the empty string.
      next_lesson: Some(person.next_lesson().to_string()),
      pay_status:  Some(person.pay_status().to_string()),
      subjects:    person
        .subjects()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect(),
    }
  }
}

impl JsonPerson {
  /// Rebuild the domain [`Person`], reporting the first invalid field.
  pub fn to_person(&self) -> Result<Person> {
    let subjects = self
      .subjects
      .iter()
      .map(|raw| {
        Subject::parse(raw).map_err(|_| Error::InvalidSubjectSet {
          rejected: raw.clone(),
        })
      })
      .collect::<Result<BTreeSet<_>>>()?;

    let name = Name::parse(required(&self.name, Name::TYPE_NAME)?)?;
    let phone = Phone::parse(required(&self.phone, Phone::TYPE_NAME)?)?;
    let email = Email::parse(required(&self.email, Email::TYPE_NAME)?)?;
    let address =
      Address::parse(required(&self.address, Address::TYPE_NAME)?)?;
    let next_lesson = NextLesson::parse(required(
      &self.next_lesson,
      NextLesson::TYPE_NAME,
    )?)?;
    let pay_status =
      PayStatus::new(required(&self.pay_status, PayStatus::TYPE_NAME)?);

    Person::builder()
      .name(name)
      .phone(phone)
      .email(email)
      .address(address)
      .next_lesson(next_lesson)
      .pay_status(pay_status)
      .subjects(subjects)
      .build()
  }
}

fn required<'a>(
  field: &'a Option<String>,
  type_name: &'static str,
) -> Result<&'a str> {
  field.as_deref().ok_or(Error::MissingField(type_name))
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike, NaiveDate, NaiveTime};
  use proptest::prelude::*;
  use rstest::rstest;

  use super::*;
  use crate::test_helpers::{benson, person};

  const INVALID_NAME: &str = "R@chel";
  const INVALID_PHONE: &str = "+651234";
  const INVALID_ADDRESS: &str = " ";
  const INVALID_EMAIL: &str = "example.com";
  const INVALID_LESSON: &str = "15/6/2025 7pm-9pm";
  const INVALID_SUBJECT: &str = "#math";

  fn valid() -> JsonPerson { JsonPerson::from(&benson()) }

  #[test]
  fn valid_person_round_trips() {
    let benson = benson();
    assert_eq!(JsonPerson::from(&benson).to_person().unwrap(), benson);
  }

  #[test]
  fn unscheduled_lesson_serialises_as_empty_string() {
    let json = JsonPerson::from(&person("Amy Bee", "", &[]));
    assert_eq!(json.next_lesson.as_deref(), Some(""));
    assert!(json.to_person().unwrap().next_lesson().is_empty());
  }

  #[test]
  fn subjects_are_written_lower_cased() {
    let json = JsonPerson::from(&person("Amy Bee", "", &["Math", "Physics"]));
    assert_eq!(json.subjects, vec!["math", "physics"]);
  }

  #[rstest]
  #[case::name(JsonPerson { name: Some(INVALID_NAME.into()), ..valid() }, Name::CONSTRAINTS)]
  #[case::phone(JsonPerson { phone: Some(INVALID_PHONE.into()), ..valid() }, Phone::CONSTRAINTS)]
  #[case::email(JsonPerson { email: Some(INVALID_EMAIL.into()), ..valid() }, Email::CONSTRAINTS)]
  #[case::address(JsonPerson { address: Some(INVALID_ADDRESS.into()), ..valid() }, Address::CONSTRAINTS)]
  #[case::lesson(JsonPerson { next_lesson: Some(INVALID_LESSON.into()), ..valid() }, NextLesson::CONSTRAINTS)]
  fn malformed_field_reports_constraint(
    #[case] json: JsonPerson,
    #[case] expected: &'static str,
  ) {
    let err = json.to_person().unwrap_err();
    assert_eq!(err, Error::MalformedValue { message: expected });
    assert_eq!(err.to_string(), expected);
  }

  #[rstest]
  #[case::name(JsonPerson { name: None, ..valid() }, "Name")]
  #[case::phone(JsonPerson { phone: None, ..valid() }, "Phone")]
  #[case::email(JsonPerson { email: None, ..valid() }, "Email")]
  #[case::address(JsonPerson { address: None, ..valid() }, "Address")]
  #[case::lesson(JsonPerson { next_lesson: None, ..valid() }, "NextLesson")]
  #[case::pay_status(JsonPerson { pay_status: None, ..valid() }, "PayStatus")]
  fn missing_field_is_named(
    #[case] json: JsonPerson,
    #[case] type_name: &'static str,
  ) {
    let err = json.to_person().unwrap_err();
    assert_eq!(err, Error::MissingField(type_name));
    assert_eq!(
      err.to_string(),
      format!("Person's {type_name} field is missing!")
    );
  }

  #[test]
  fn one_bad_subject_rejects_the_record() {
    let mut json = valid();
    json.subjects.push(INVALID_SUBJECT.to_string());
    assert_eq!(
      json.to_person(),
      Err(Error::InvalidSubjectSet {
        rejected: INVALID_SUBJECT.to_string(),
      })
    );
  }

  #[test]
  fn duplicate_subject_entries_collapse() {
    let mut json = valid();
    json.subjects = vec!["math".into(), "Math".into(), "MATH".into()];
    assert_eq!(json.to_person().unwrap().subjects().len(), 1);
  }

  #[test]
  fn json_keys_are_camel_case() {
    let value = serde_json::to_value(valid()).unwrap();
    for key in [
      "name",
      "phone",
      "email",
      "address",
      "nextLesson",
      "payStatus",
      "subjects",
    ] {
      assert!(value.get(key).is_some(), "missing key {key}");
    }
  }

  #[test]
  fn absent_and_null_keys_both_count_as_missing() {
    let absent: JsonPerson = serde_json::from_str(
      r#"{"phone":"911","email":"a@bc","address":"x","nextLesson":"","payStatus":""}"#,
    )
    .unwrap();
    let null: JsonPerson = serde_json::from_str(
      r#"{"name":null,"phone":"911","email":"a@bc","address":"x","nextLesson":"","payStatus":"","subjects":[]}"#,
    )
    .unwrap();
    assert_eq!(absent.to_person(), Err(Error::MissingField("Name")));
    assert_eq!(null.to_person(), Err(Error::MissingField("Name")));
  }

  // ── Round trip ──────────────────────────────────────────────────────────

  prop_compose! {
    fn arb_lesson()(
      day in 1u32..=28,
      month in 1u32..=12,
      year in 2000i32..=2100,
      start in 0u32..24 * 60,
      end in 0u32..24 * 60,
    ) -> String {
      format!(
        "{day:02}/{month:02}/{year:04} {:02}{:02}-{:02}{:02}",
        start / 60, start % 60, end / 60, end % 60
      )
    }
  }

  prop_compose! {
    fn arb_typed_lesson()(
      days in NaiveDate::MIN.num_days_from_ce()..=NaiveDate::MAX.num_days_from_ce(),
      start in 0u32..86_400,
      end in 0u32..86_400,
      nanos in 0u32..1_000_000_000,
    ) -> NextLesson {
      NextLesson::scheduled(
        NaiveDate::from_num_days_from_ce_opt(days).unwrap(),
        NaiveTime::from_num_seconds_from_midnight_opt(start, nanos).unwrap(),
        NaiveTime::from_num_seconds_from_midnight_opt(end, 0).unwrap(),
      )
    }
  }

  fn arb_next_lesson() -> impl Strategy<Value = NextLesson> {
    prop_oneof![
      Just(NextLesson::Unscheduled),
      arb_lesson().prop_map(|s| NextLesson::parse(&s).unwrap()),
      arb_typed_lesson(),
    ]
  }

  prop_compose! {
    fn arb_person()(
      name in "[A-Za-z0-9][A-Za-z0-9 ]{0,20}",
      phone in "[0-9]{3,12}",
      email in "[a-z0-9]{1,8}([._+-][a-z0-9]{1,8})?@[a-z0-9]{1,8}\\.[a-z]{2,6}",
      address in "[^\\s][^\\n]{0,30}",
      lesson in arb_next_lesson(),
      pay_status in ".{0,12}",
      subjects in proptest::collection::vec("[A-Za-z0-9]{1,10}", 0..5),
    ) -> Person {
      Person::builder()
        .name(Name::parse(&name).unwrap())
        .phone(Phone::parse(&phone).unwrap())
        .email(Email::parse(&email).unwrap())
        .address(Address::parse(&address).unwrap())
        .next_lesson(lesson)
        .pay_status(PayStatus::new(pay_status))
        .subjects(subjects.iter().map(|s| Subject::parse(s).unwrap()))
        .build()
        .unwrap()
    }
  }

  #[test]
  fn typed_lesson_with_seconds_round_trips() {
    let lesson = NextLesson::scheduled(
      NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
      NaiveTime::from_hms_opt(19, 0, 30).unwrap(),
      NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
    );
    let person = benson().to_builder().next_lesson(lesson).build().unwrap();
    assert_eq!(JsonPerson::from(&person).to_person().unwrap(), person);
  }

  #[test]
  fn five_digit_year_round_trips() {
    let lesson = NextLesson::scheduled(
      NaiveDate::from_ymd_opt(10000, 1, 1).unwrap(),
      NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
      NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
    );
    let person = benson().to_builder().next_lesson(lesson).build().unwrap();
    let json = JsonPerson::from(&person);
    assert_eq!(json.next_lesson.as_deref(), Some("01/01/+10000 1900-2100"));
    assert_eq!(json.to_person().unwrap(), person);
  }

  proptest! {
    #[test]
    fn every_valid_person_round_trips(person in arb_person()) {
      let json = JsonPerson::from(&person);
      prop_assert_eq!(json.to_person().unwrap(), person.clone());

      let text = serde_json::to_string(&json).unwrap();
      let reread: JsonPerson = serde_json::from_str(&text).unwrap();
      prop_assert_eq!(reread.to_person().unwrap(), person);
    }
  }
}
