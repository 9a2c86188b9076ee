use std::sync::LazyLock;

use regex::Regex;

use super::field::{impl_conversions, Field, ValidationError};

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("TAG_PATTERN must be a valid regex"));

/// A free-form label attached to a contact. Alphanumeric only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Creates a new `Tag`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the tag is empty or not alphanumeric.
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

impl Field for Tag {
    const NAME: &'static str = "Tag";
    const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    fn is_valid(raw: &str) -> bool {
        TAG_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Tag, as_str);
