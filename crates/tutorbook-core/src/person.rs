//! The person record stored in the address book, and its builder.
//!
//! A person is assembled from already-validated value types and never changes
//! afterwards. Editing a person means building a new one, typically via
//! [`Person::to_builder`].

use std::collections::BTreeSet;

use crate::{
  Error, Result,
  lesson::NextLesson,
  subject::Subject,
  value::{Address, Email, Name, PayStatus, Phone},
};

/// A student's contact record.
///
/// Equality compares every field; subjects compare as an unordered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  name:        Name,
  phone:       Phone,
  email:       Email,
  address:     Address,
  next_lesson: NextLesson,
  pay_status:  PayStatus,
  subjects:    BTreeSet<Subject>,
}

impl Person {
  pub fn builder() -> PersonBuilder { PersonBuilder::default() }

  /// A builder pre-filled with every field of `self`.
  pub fn to_builder(&self) -> PersonBuilder {
    PersonBuilder {
      name:        Some(self.name.clone()),
      phone:       Some(self.phone.clone()),
      email:       Some(self.email.clone()),
      address:     Some(self.address.clone()),
      next_lesson: Some(self.next_lesson),
      pay_status:  Some(self.pay_status.clone()),
      subjects:    self.subjects.clone(),
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phone(&self) -> &Phone { &self.phone }

  pub fn email(&self) -> &Email { &self.email }

  pub fn address(&self) -> &Address { &self.address }

  pub fn next_lesson(&self) -> &NextLesson { &self.next_lesson }

  pub fn pay_status(&self) -> &PayStatus { &self.pay_status }

  pub fn subjects(&self) -> &BTreeSet<Subject> { &self.subjects }

  /// Weaker identity than `==`: two records describe the same person when
  /// their names match. Used to keep an address book free of duplicates.
  pub fn is_same_person(&self, other: &Person) -> bool {
    self.name == other.name
  }
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// Step-by-step assembly of a [`Person`].
///
/// Every scalar field is required; subjects default to the empty set.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
  name:        Option<Name>,
  phone:       Option<Phone>,
  email:       Option<Email>,
  address:     Option<Address>,
  next_lesson: Option<NextLesson>,
  pay_status:  Option<PayStatus>,
  subjects:    BTreeSet<Subject>,
}

impl PersonBuilder {
  pub fn name(mut self, name: Name) -> Self {
    self.name = Some(name);
    self
  }

  pub fn phone(mut self, phone: Phone) -> Self {
    self.phone = Some(phone);
    self
  }

  pub fn email(mut self, email: Email) -> Self {
    self.email = Some(email);
    self
  }

  pub fn address(mut self, address: Address) -> Self {
    self.address = Some(address);
    self
  }

  pub fn next_lesson(mut self, next_lesson: NextLesson) -> Self {
    self.next_lesson = Some(next_lesson);
    self
  }

  pub fn pay_status(mut self, pay_status: PayStatus) -> Self {
    self.pay_status = Some(pay_status);
    self
  }

  /// Replace the subject set.
  pub fn subjects(mut self, subjects: impl IntoIterator<Item = Subject>) -> Self {
    self.subjects = subjects.into_iter().collect();
    self
  }

  /// Add one subject; adding a subject already present is a no-op.
  pub fn subject(mut self, subject: Subject) -> Self {
    self.subjects.insert(subject);
    self
  }

  /// Finish the record, failing with [`Error::MissingField`] for the first
  /// absent field in declaration order.
  pub fn build(self) -> Result<Person> {
    Ok(Person {
      name:        self.name.ok_or(Error::MissingField(Name::TYPE_NAME))?,
      phone:       self.phone.ok_or(Error::MissingField(Phone::TYPE_NAME))?,
      email:       self.email.ok_or(Error::MissingField(Email::TYPE_NAME))?,
      address:     self
        .address
        .ok_or(Error::MissingField(Address::TYPE_NAME))?,
      next_lesson: self
        .next_lesson
        .ok_or(Error::MissingField(NextLesson::TYPE_NAME))?,
      pay_status:  self
        .pay_status
        .ok_or(Error::MissingField(PayStatus::TYPE_NAME))?,
      subjects:    self.subjects,
    })
  }
}
