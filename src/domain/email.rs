use std::sync::LazyLock;

use regex::Regex;

use super::field::{impl_conversions, Field, ValidationError};

const LOCAL_PART: &str = r"[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*";
const DOMAIN_LABEL: &str = r"[A-Za-z0-9]+(-[A-Za-z0-9]+)*";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // The final label repeats at least twice, so it is at least two characters.
    let pattern = format!(r"^{LOCAL_PART}@({DOMAIN_LABEL}\.)*({DOMAIN_LABEL}){{2,}}$");
    Regex::new(&pattern).expect("EMAIL_PATTERN must be a valid regex")
});

/// A contact's email address, of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the address does not satisfy
    /// [`Email::MESSAGE_CONSTRAINTS`](Field::MESSAGE_CONSTRAINTS).
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

impl Field for Email {
    const NAME: &'static str = "Email";
    const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special \
        characters, excluding the parentheses, (+_.-). The local-part may not start or end with \
        any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of \
        domain labels separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by \
        hyphens, if any.";

    fn is_valid(raw: &str) -> bool {
        EMAIL_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.to_string())
    }
}

impl_conversions!(Email, as_str);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(""; "empty string")]
    #[test_case(" "; "spaces only")]
    #[test_case("@example.com"; "missing local part")]
    #[test_case("peterjackexample.com"; "missing @ symbol")]
    #[test_case("peterjack@"; "missing domain name")]
    #[test_case("peterjack@-"; "invalid domain name")]
    #[test_case("peter jack@example.com"; "spaces in local part")]
    #[test_case("peterjack@exam ple.com"; "spaces in domain name")]
    #[test_case(" peterjack@example.com"; "leading space")]
    #[test_case("peterjack@example.com "; "trailing space")]
    #[test_case("peterjack@@example.com"; "double @ symbol")]
    #[test_case("peter@jack@example.com"; "@ symbol in local part")]
    #[test_case("-peterjack@example.com"; "local part starts with hyphen")]
    #[test_case("peterjack-@example.com"; "local part ends with hyphen")]
    #[test_case("peter..jack@example.com"; "consecutive periods in local part")]
    #[test_case("peterjack@example@com"; "@ symbol in domain name")]
    #[test_case("peterjack@.example.com"; "domain starts with a period")]
    #[test_case("peterjack@example.com."; "domain ends with a period")]
    #[test_case("peterjack@-example.com"; "domain starts with a hyphen")]
    #[test_case("peterjack@example.com-"; "domain ends with a hyphen")]
    #[test_case("peterjack@example.c"; "top level label one character")]
    #[test_case("peterjack@example!.com"; "special character in domain")]
    fn invalid_emails(raw: &str) {
        assert!(!Email::is_valid(raw));
    }

    #[test_case("PeterJack_1190@example.com"; "underscore in local part")]
    #[test_case("PeterJack.1190@example.com"; "period in local part")]
    #[test_case("PeterJack+1190@example.com"; "plus in local part")]
    #[test_case("PeterJack-1190@example.com"; "hyphen in local part")]
    #[test_case("a@bc"; "minimal")]
    #[test_case("test@localhost"; "alphabets only")]
    #[test_case("123@145"; "numeric local part and domain name")]
    #[test_case("a1+be.d@example1.com"; "mixture of characters")]
    #[test_case("peter_jack@very-very-very-long-example.com"; "long domain name")]
    #[test_case("if.you.dream.it_you.can.do.it@example.com"; "long local part")]
    #[test_case("e1234567@u.nus.edu"; "more than one period in domain")]
    fn valid_emails(raw: &str) {
        assert!(Email::is_valid(raw));
    }

    #[test]
    fn invalid_email_reports_constraints() {
        let error = Email::try_from("example.com").unwrap_err();
        assert_eq!(error.message(), Email::MESSAGE_CONSTRAINTS);
    }
}
