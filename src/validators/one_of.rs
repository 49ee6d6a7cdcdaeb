//! Membership validators

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::{Validate, ValidationError};

/// Validates that a value equals one of the supplied candidates.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = one_of(["foo", "bar"]);
/// assert!(validator.validate(&"foo").is_ok());
///
/// let err = validator.validate(&"baz").unwrap_err();
/// assert_eq!(err.messages().next(), Some("in (foo, bar)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<T> {
    candidates: Vec<T>,
}

impl<T> OneOf<T> {
    /// Creates a membership validator over the given candidates.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty (construction-time misuse: such a
    /// validator could never succeed and would render an empty list).
    #[must_use]
    pub fn new(candidates: impl IntoIterator<Item = T>) -> Self {
        let candidates: Vec<T> = candidates.into_iter().collect();
        assert!(
            !candidates.is_empty(),
            "one_of requires at least one candidate"
        );
        Self { candidates }
    }

    /// The candidate values.
    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }
}

impl<T: PartialEq + Display> Validate for OneOf<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.candidates.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        let joined = self
            .candidates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Cow::Owned(format!("in ({joined})"))
    }
}

/// Creates a [`OneOf`] validator.
///
/// # Panics
///
/// Panics if `candidates` is empty.
#[must_use]
pub fn one_of<T: PartialEq + Display>(candidates: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(candidates)
}

// ============================================================================
// TESTS
// ============================================================================
