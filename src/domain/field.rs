use std::fmt;

/// Error returned when a raw string does not satisfy a field's format rule.
///
/// The error displays as the field's constraint message, verbatim, so it can be
/// shown to users as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: &'static str,
}

impl ValidationError {
    /// Creates an error for the named field with the given constraint message.
    #[must_use]
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Creates the error reported by the field type `F`.
    #[must_use]
    pub const fn of<F: Field>() -> Self {
        Self::new(F::NAME, F::MESSAGE_CONSTRAINTS)
    }

    /// The name of the field that failed validation (e.g. `"Phone"`).
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// The constraint message of the field that failed validation.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// A single validated value of a contact record.
///
/// Every field type enforces its format rule at construction, so a value that
/// exists is always valid. [`Field::is_valid`] exposes the same rule as a pure
/// check, so callers can test input before committing to it.
pub trait Field: Sized {
    /// Human-readable name of the field, used in error messages.
    const NAME: &'static str;

    /// The message shown when a value does not satisfy the format rule.
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Returns `true` if `raw` satisfies the format rule.
    fn is_valid(raw: &str) -> bool;

    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying [`Field::MESSAGE_CONSTRAINTS`]
    /// if `raw` is not valid.
    fn parse(raw: &str) -> Result<Self, ValidationError>;
}

/// Writes `; label: value` if the value is present.
pub(crate) fn write_optional<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&T>,
) -> fmt::Result {
    value.map_or(Ok(()), |value| write!(f, "; {label}: {value}"))
}

/// Implements `FromStr` and `TryFrom` for a [`Field`] type in terms of
/// [`Field::parse`]. The `as_str` form also implements `AsRef<str>` and
/// `Display` for types exposing an `as_str` method.
macro_rules! impl_conversions {
    ($ty:ty) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::domain::field::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::domain::field::Field>::parse(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::domain::field::ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                <Self as $crate::domain::field::Field>::parse(value)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::domain::field::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <Self as $crate::domain::field::Field>::parse(&value)
            }
        }
    };
    ($ty:ty, as_str) => {
        $crate::domain::field::impl_conversions!($ty);

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use impl_conversions;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Phone, Tag};

    #[test]
    fn error_displays_constraint_message_verbatim() {
        let error = ValidationError::of::<Phone>();
        assert_eq!(error.to_string(), Phone::MESSAGE_CONSTRAINTS);
        assert_eq!(error.field(), "Phone");
    }

    #[test]
    fn errors_from_different_fields_differ() {
        assert_ne!(ValidationError::of::<Phone>(), ValidationError::of::<Tag>());
    }
}
