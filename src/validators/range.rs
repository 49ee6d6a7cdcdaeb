//! Numeric range validators for comparable values

use std::borrow::Cow;
use std::fmt::Display;

use crate::bounds::RangeSpec;
use crate::foundation::{Validate, ValidationError};

/// Validates that a comparable value falls within a range.
///
/// Accepts any standard range expression; a half-open range behaves like
/// the equivalent closed range (`3..5` ≡ `3..=4`).
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = in_range(3..5);
/// assert!(validator.validate(&4).is_ok());
///
/// let err = validator.validate(&5).unwrap_err();
/// assert_eq!(err.messages().next(), Some("range: between 3 and 4"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InRange<T> {
    spec: RangeSpec<T>,
}

impl<T> InRange<T> {
    /// Creates a range validator from a range expression.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or empty (construction-time misuse).
    #[must_use]
    pub fn new(range: impl Into<RangeSpec<T>>) -> Self {
        Self { spec: range.into() }
    }

    /// The configured bounds.
    pub fn spec(&self) -> &RangeSpec<T> {
        &self.spec
    }
}

impl<T: PartialOrd + Display> Validate for InRange<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.spec.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Owned(format!("range: {}", self.spec.render()))
    }
}

/// Creates an [`InRange`] validator from a range expression.
///
/// # Panics
///
/// Panics if the range is inverted or empty.
#[must_use]
pub fn in_range<T: PartialOrd + Display>(range: impl Into<RangeSpec<T>>) -> InRange<T> {
    InRange::new(range)
}

// ============================================================================
// TESTS
// ============================================================================
