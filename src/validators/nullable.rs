//! Validators for `Option` inputs

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates that an `Option` is `None`.
///
/// Combine with NOT to require a present value:
///
/// ```rust
/// use validus::prelude::*;
///
/// let required = is_none::<i32>().not();
/// assert!(required.validate(&Some(1)).is_ok());
///
/// let err = required.validate(&None).unwrap_err();
/// assert_eq!(err.messages().next(), Some("not nil"));
/// ```
pub struct IsNone<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> IsNone<T> {
    /// Creates a new `IsNone` validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IsNone<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IsNone<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IsNone")
    }
}

impl<T> Clone for IsNone<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IsNone<T> {}

impl<T> Validate for IsNone<T> {
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_none() {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("nil")
    }
}

/// Creates an [`IsNone`] validator.
#[must_use]
pub fn is_none<T>() -> IsNone<T> {
    IsNone::new()
}

// ============================================================================
// TESTS
// ============================================================================
