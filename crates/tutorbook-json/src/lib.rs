//! JSON persistence for tutorbook.
//!
//! Converts between [`tutorbook_core`] people and a flat, string-only JSON
//! document. The conversion is synchronous and pure; [`JsonStorage`] adds
//! file I/O on top.
//!
//! # Quick start
//!
//! ```no_run
//! use tutorbook_json::{from_str, to_string};
//!
//! let doc = r#"{"persons":[{"name":"Amy Bee","phone":"85355255",
//!   "email":"amy@gmail.com","address":"123, Jurong West Ave 6",
//!   "nextLesson":"15/06/2025 1900-2100","payStatus":"","subjects":["math"]}]}"#;
//! let people = from_str(doc).unwrap();
//! println!("{}", to_string(&people).unwrap());
//! ```

mod adapted;
mod book;
pub mod error;
mod storage;

pub use adapted::JsonPerson;
pub use book::JsonAddressBook;
pub use error::{Error, Result};
pub use storage::JsonStorage;
use tutorbook_core::person::Person;

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Parse an address-book document into people, in document order.
pub fn from_str(input: &str) -> Result<Vec<Person>> {
  let book: JsonAddressBook = serde_json::from_str(input)?;
  book.to_persons()
}

/// Serialise `persons` as a pretty-printed address-book document.
pub fn to_string(persons: &[Person]) -> Result<String> {
  Ok(serde_json::to_string_pretty(&JsonAddressBook::from_persons(
    persons,
  ))?)
}

// ─── Round-trip test ─────────────────────────────────────────────────────────


// ─── Shared test helpers ──────────────────────────────────────────────────────
