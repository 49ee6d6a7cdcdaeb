//! String content validators: email and URL shape

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").unwrap()
});

// ============================================================================
// EMAIL
// ============================================================================

/// Validates email shape.
///
/// The entire string must match the pattern — a valid address embedded in
/// longer text does not pass.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// assert!(email().validate("foo@bar.com").is_ok());
///
/// let err = email().validate("not an email").unwrap_err();
/// assert_eq!(err.messages().next(), Some("invalid email"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("invalid email")
    }

    fn negated_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("valid email")
    }
}

/// Creates an [`Email`] validator.
#[must_use]
pub fn email() -> Email {
    Email
}

// ============================================================================
// URL
// ============================================================================

/// Validates URL shape.
///
/// A string passes when it parses as a `file:` URL, or parses with both a
/// scheme and a non-empty host.
///
/// ```rust
/// use validus::prelude::*;
///
/// assert!(url().validate("http://example.com").is_ok());
/// assert!(url().validate("file:///var/log/syslog").is_ok());
/// assert!(url().validate("not a url").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Url;

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let well_formed = match ::url::Url::parse(input) {
            Ok(parsed) => parsed.scheme() == "file" || parsed.has_host(),
            Err(_) => false,
        };
        if well_formed {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("invalid url")
    }

    fn negated_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("valid url")
    }
}

/// Creates a [`Url`] validator.
#[must_use]
pub fn url() -> Url {
    Url
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        let validator = email();
        for address in ["foo@bar.com", "first.last+tag@sub.example.org", "a@b.io"] {
            assert!(validator.validate(address).is_ok(), "rejected {address}");
        }
    }

    #[test]
    fn invalid_emails() {
        let validator = email();
        for address in ["not an email", "@example.com", "user@", "user@host"] {
            let err = validator.validate(address).unwrap_err();
            assert_eq!(err.messages().next(), Some("invalid email"));
        }
    }

    #[test]
    fn email_must_match_entire_string() {
        let validator = email();
        assert!(validator.validate("see foo@bar.com for details").is_err());
        assert!(validator.validate("foo@bar.com ").is_err());
    }

    #[test]
    fn valid_urls() {
        let validator = url();
        for value in [
            "http://example.com",
            "https://example.com/path?q=1",
            "file:///var/log/syslog",
        ] {
            assert!(validator.validate(value).is_ok(), "rejected {value}");
        }
    }

    #[test]
    fn invalid_urls() {
        let validator = url();
        for value in ["invalid", "no spaces allowed", "mailto:user"] {
            let err = validator.validate(value).unwrap_err();
            assert_eq!(err.messages().next(), Some("invalid url"));
        }
    }
}
