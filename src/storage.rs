//! Reading and writing the contact book on disk.
//!
//! The book lives in a single JSON file. [`JsonPerson`] and
//! [`JsonAddressBook`] mirror the domain types with raw strings, and every
//! value read back is validated again before it becomes a [`Person`](crate::Person).
//! The [`Store`] ties the JSON representation to a root directory and its
//! [`Config`](crate::Config).

mod json;
mod store;

pub use json::{JsonAddressBook, JsonPerson, PersistError};
pub use store::{Store, StoreError};
