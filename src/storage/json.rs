use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    AddressBook, Email, Field, Housing, Link, Major, Name, Person, Phone, Tag, ValidationError,
    Year,
};

/// Errors raised when turning stored JSON back into domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    /// A mandatory field was absent.
    #[error("{0} field is missing!")]
    MissingField(&'static str),

    /// A field was present but failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Two stored records have the same name.
    #[error("Persons list contains duplicate person(s).")]
    Duplicate,
}

/// The stored form of a [`Person`].
///
/// Every value is kept as the raw string the user typed. Absent optional
/// fields are left out of the output, and are accepted as either missing or
/// `null` on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPerson {
    /// The contact's name. Required.
    #[serde(default)]
    pub name: Option<String>,

    /// The phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The year of study.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// The major.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    /// Where the contact lives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing: Option<String>,

    /// The NUSMods timetable link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Tag names.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Person> for JsonPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: person.phone().map(ToString::to_string),
            email: person.email().map(ToString::to_string),
            year: person.year().map(|year| year.to_string()),
            major: person.major().map(ToString::to_string),
            housing: person.housing().map(ToString::to_string),
            link: person.link().map(ToString::to_string),
            tags: person.tags().iter().map(ToString::to_string).collect(),
        }
    }
}

impl JsonPerson {
    /// Validates the stored values and builds a [`Person`].
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::MissingField`] if the name is absent, or
    /// [`PersistError::Invalid`] carrying the constraint message of the first
    /// field that fails validation. A single invalid tag fails the whole
    /// record.
    pub fn into_person(self) -> Result<Person, PersistError> {
        let name = self
            .name
            .ok_or(PersistError::MissingField(Name::NAME))?;

        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Person::new(Name::parse(&name)?)
            .with_phone(optional::<Phone>(self.phone.as_deref())?)
            .with_email(optional::<Email>(self.email.as_deref())?)
            .with_year(optional::<Year>(self.year.as_deref())?)
            .with_major(optional::<Major>(self.major.as_deref())?)
            .with_housing(optional::<Housing>(self.housing.as_deref())?)
            .with_link(optional::<Link>(self.link.as_deref())?)
            .with_tags(tags))
    }
}

fn optional<F: Field>(raw: Option<&str>) -> Result<Option<F>, ValidationError> {
    raw.map(F::parse).transpose()
}

impl TryFrom<JsonPerson> for Person {
    type Error = PersistError;

    fn try_from(json: JsonPerson) -> Result<Self, Self::Error> {
        json.into_person()
    }
}

/// The stored form of a whole [`AddressBook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAddressBook {
    /// Every record, in insertion order.
    #[serde(default)]
    pub persons: Vec<JsonPerson>,
}

impl From<&AddressBook> for JsonAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(JsonPerson::from).collect(),
        }
    }
}

impl JsonAddressBook {
    /// Validates every record and builds an [`AddressBook`].
    ///
    /// With `skip_invalid`, records that fail validation are logged and left
    /// out instead of failing the whole book.
    ///
    /// # Errors
    ///
    /// Returns the error of the first invalid record (unless `skip_invalid`
    /// is set), or [`PersistError::Duplicate`] if two records share a name.
    pub fn into_address_book(self, skip_invalid: bool) -> Result<AddressBook, PersistError> {
        let mut persons = Vec::with_capacity(self.persons.len());
        for (index, json) in self.persons.into_iter().enumerate() {
            let person = match json.into_person() {
                Ok(person) => person,
                Err(error) if skip_invalid => {
                    warn!(index, "Skipping invalid record: {error}");
                    continue;
                }
                Err(error) => return Err(error),
            };
            persons.push(person);
        }
        AddressBook::from_persons(persons).map_err(|_| PersistError::Duplicate)
    }
}
