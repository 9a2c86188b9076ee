use std::fmt;

use super::field::{impl_conversions, Field, ValidationError};

const MIN_YEAR: u8 = 1;
const MAX_YEAR: u8 = 6;

/// A contact's year of study, from 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u8);

impl Year {
    /// Creates a new `Year` from its textual form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `value` is a single digit from 1
    /// to 6.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(value) {
            return Err(ValidationError::of::<Self>());
        }
        value
            .parse()
            .map(Self)
            .map_err(|_| ValidationError::of::<Self>())
    }

    /// Returns the year as a number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Field for Year {
    const NAME: &'static str = "Year";
    const MESSAGE_CONSTRAINTS: &'static str = "Year should be a single digit from 1 to 6";

    fn is_valid(raw: &str) -> bool {
        match raw.as_bytes() {
            &[digit] if digit.is_ascii_digit() => (MIN_YEAR..=MAX_YEAR).contains(&(digit - b'0')),
            _ => false,
        }
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }
}

impl_conversions!(Year);

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
