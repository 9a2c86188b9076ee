use std::sync::LazyLock;

use regex::Regex;

use super::field::{impl_conversions, Field, ValidationError};

static HOUSING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S.*$").expect("HOUSING_PATTERN must be a valid regex"));

/// Where a contact lives. Free text, but never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Housing(String);

impl Housing {
    /// Creates a new `Housing`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the value is empty or starts with
    /// whitespace.
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

impl Field for Housing {
    const NAME: &'static str = "Housing";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Housing can take any values, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        HOUSING_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Housing, as_str);
