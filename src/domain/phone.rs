use std::sync::LazyLock;

use regex::Regex;

use super::field::{impl_conversions, Field, ValidationError};

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("PHONE_PATTERN must be a valid regex"));

/// A contact's phone number: three or more digits, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    /// Creates a new `Phone`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the number contains anything other
    /// than digits, or has fewer than three of them.
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

impl Field for Phone {
    const NAME: &'static str = "Phone";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    fn is_valid(raw: &str) -> bool {
        PHONE_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Phone, as_str);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(""; "empty string")]
    #[test_case(" "; "spaces only")]
    #[test_case("91"; "less than 3 numbers")]
    #[test_case("phone"; "non-numeric")]
    #[test_case("9011p041"; "alphabets within digits")]
    #[test_case("9312 1534"; "spaces within digits")]
    #[test_case("+651234"; "leading plus")]
    #[test_case("١٢٣"; "non-ascii digits")]
    fn invalid_phones(raw: &str) {
        assert!(!Phone::is_valid(raw));
        assert_eq!(Phone::try_from(raw), Err(ValidationError::of::<Phone>()));
    }

    #[test_case("911"; "exactly 3 numbers")]
    #[test_case("93121534"; "local number")]
    #[test_case("124293842033123"; "long phone number")]
    fn valid_phones(raw: &str) {
        assert!(Phone::is_valid(raw));
        assert_eq!(Phone::try_from(raw).unwrap().to_string(), raw);
    }
}
