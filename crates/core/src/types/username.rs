//! Clerk username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is empty.
    #[error("username cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("username cannot contain whitespace")]
    ContainsWhitespace,
}

/// A clerk's login name.
///
/// ## Constraints
///
/// - Length: 1-50 characters (the `users.username` column width)
/// - No whitespace characters
///
/// ## Examples
///
/// ```
/// use pronto_core::Username;
///
/// assert!(Username::parse("mostrador1").is_ok());
/// assert!(Username::parse("ana.garcia").is_ok());
///
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("two words").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Maximum length of a username.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `Username` from a string.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns a [`UsernameError`] describing the first constraint violated.
    pub fn parse(input: &str) -> Result<Self, UsernameError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UsernameError::ContainsWhitespace);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert_eq!(Username::parse("clerk").expect("valid").as_str(), "clerk");
        assert_eq!(
            Username::parse("  padded  ").expect("valid").as_str(),
            "padded"
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Username::parse(""), Err(UsernameError::Empty)));
        assert!(matches!(Username::parse("   "), Err(UsernameError::Empty)));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "x".repeat(51);
        assert!(matches!(
            Username::parse(&long),
            Err(UsernameError::TooLong { max: 50 })
        ));
        assert!(Username::parse(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_rejects_interior_whitespace() {
        assert!(matches!(
            Username::parse("two words"),
            Err(UsernameError::ContainsWhitespace)
        ));
    }
}
