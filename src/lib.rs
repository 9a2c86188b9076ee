//! Plain-text Contact Book
//!
//! Contacts are validated records stored in a single JSON file. Each contact
//! may carry an NUSMods timetable link, from which the modules the contact is
//! taking are derived for searching.

pub mod domain;
pub use domain::{
    listed_overview, All, AddressBook, AddressBookError, Config, Email, Field, Housing, Link, Major,
    ModuleMatch, Name, NameMatch, Person, PersonEdit, Phone, Predicate, Tag, ValidationError, Year,
};

/// JSON persistence for the contact book.
pub mod storage;
pub use storage::{JsonAddressBook, JsonPerson, PersistError, Store, StoreError};

#[cfg(test)]
pub(crate) mod testing;
