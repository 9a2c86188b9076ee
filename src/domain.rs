//! Domain models for the contact book.
//!
//! This module contains the validated field types, the [`Person`] record,
//! the predicates used to query records, and the [`AddressBook`] collection.

/// The shared validation contract for field types.
pub mod field;
pub use field::{Field, ValidationError};

/// Contact name.
pub mod name;
pub use name::Name;

mod email;
pub use email::Email;

mod phone;
pub use phone::Phone;

mod year;
pub use year::Year;

mod major;
pub use major::Major;

mod housing;
pub use housing::Housing;

/// NUSMods timetable links and module code extraction.
pub mod link;
pub use link::Link;

mod tag;
pub use tag::Tag;

/// The contact record.
pub mod person;
pub use person::{Person, PersonEdit};

/// Queries over contact records.
pub mod predicate;
pub use predicate::{All, ModuleMatch, NameMatch, Predicate};

/// The in-memory collection of contacts and its filtered view.
pub mod address_book;
pub use address_book::{listed_overview, AddressBook, AddressBookError};

mod config;
pub use config::Config;
