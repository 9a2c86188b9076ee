use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

use non_empty_string::NonEmptyString;
use regex::Regex;

use super::field::{impl_conversions, Field, ValidationError};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("NAME_PATTERN must be a valid regex")
});

/// A contact's name.
///
/// Names contain only ASCII letters, digits and spaces, and must start with a
/// letter or digit. A name is never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(NonEmptyString);

impl Name {
    /// Creates a new `Name`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is blank or contains
    /// characters other than letters, digits and spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::Name;
    ///
    /// assert!(Name::new("Amy Bee".to_string()).is_ok());
    /// assert!(Name::new(" Amy".to_string()).is_err());
    /// assert!(Name::new("R@chel".to_string()).is_err());
    /// ```
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if !Self::is_valid(&value) {
            return Err(ValidationError::of::<Self>());
        }
        NonEmptyString::new(value)
            .map(Self)
            .map_err(|_| ValidationError::of::<Self>())
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the whitespace-separated words of the name.
    #[must_use]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.as_str().split_whitespace()
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Field for Name {
    const NAME: &'static str = "Name";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        NAME_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Name, as_str);
