//! Core domain types for tutorbook, a contact manager for private tutors.
//!
//! A [`Person`](person::Person) is built from self-validating value types
//! and queried with the date filter in [`filter`]. This crate is pure and
//! synchronous; persistence lives in `tutorbook-json`.

pub mod error;
pub mod filter;
pub mod lesson;
pub mod person;
pub mod subject;
pub mod value;

pub use error::{Error, Result};
