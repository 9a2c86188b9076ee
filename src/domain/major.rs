use std::sync::LazyLock;

use regex::Regex;

use super::field::{impl_conversions, Field, ValidationError};

static MAJOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z &(),.'-]*$").expect("MAJOR_PATTERN must be a valid regex")
});

/// A contact's field of study, e.g. "Computer Science".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Major(String);

impl Major {
    /// Creates a new `Major`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the major is blank, does not start
    /// with a letter, or contains characters other than letters, spaces and
    /// `& - ( ) , . '`.
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::of::<Self>())
        }
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Major {
    const NAME: &'static str = "Major";
    const MESSAGE_CONSTRAINTS: &'static str = "Major should only contain letters, spaces and the \
        symbols & - ( ) , . ' and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        MAJOR_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Major, as_str);
