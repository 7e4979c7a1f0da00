//! The on-disk document: an ordered list of adapted persons.

use serde::{Deserialize, Serialize};
use tutorbook_core::person::Person;

use crate::{
  adapted::JsonPerson,
  error::{Error, Result},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAddressBook {
  #[serde(default)]
  pub persons: Vec<JsonPerson>,
}

impl JsonAddressBook {
  pub fn from_persons<'a>(
    persons: impl IntoIterator<Item = &'a Person>,
  ) -> Self {
    Self {
      persons: persons.into_iter().map(JsonPerson::from).collect(),
    }
  }

  /// Convert every record, preserving order.
  ///
  /// The whole document is rejected on the first invalid record or if two
  /// records describe the same person.
  pub fn to_persons(&self) -> Result<Vec<Person>> {
    let mut persons: Vec<Person> = Vec::with_capacity(self.persons.len());
    for json in &self.persons {
      let person = json.to_person()?;
      if persons.iter().any(|p| p.is_same_person(&person)) {
        return Err(Error::DuplicatePerson);
      }
      persons.push(person);
    }
    Ok(persons)
  }
}
