//! Emptiness and always-pass validators

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Countable, Validate, ValidationError};

// ============================================================================
// EMPTY
// ============================================================================

/// Validates that a sequence is empty.
///
/// Usually combined with NOT to require a value:
///
/// ```rust
/// use validus::prelude::*;
///
/// let required = empty().not();
/// assert!(required.validate("foo").is_ok());
///
/// let err = required.validate("").unwrap_err();
/// assert_eq!(err.messages().next(), Some("not empty"));
/// ```
pub struct Empty<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Empty<T> {
    /// Creates a new `Empty` validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T: ?Sized> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Empty<T> {}

impl<T: Countable + ?Sized> Validate for Empty<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.count() == 0 {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("empty")
    }
}

/// Creates an [`Empty`] validator.
#[must_use]
pub fn empty<T: Countable + ?Sized>() -> Empty<T> {
    Empty::new()
}

// ============================================================================
// NEVER FAILS
// ============================================================================

/// A validator that always succeeds.
///
/// Useful as the identity when folding a collection of validators with
/// [`and_all`](crate::combinators::and_all), and as a placeholder while a
/// field's real rules are still undecided.
///
/// ```rust
/// use validus::prelude::*;
///
/// assert!(never_fails().validate("anything at all").is_ok());
/// ```
pub struct NeverFails<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> NeverFails<T> {
    /// Creates a new `NeverFails` validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for NeverFails<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for NeverFails<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NeverFails")
    }
}

impl<T: ?Sized> Clone for NeverFails<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NeverFails<T> {}

impl<T: ?Sized> Validate for NeverFails<T> {
    type Input = T;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("never fails")
    }

    fn negated_text(&self) -> Cow<'static, str> {
        Cow::Borrowed("never fails")
    }
}

/// Creates a [`NeverFails`] validator.
#[must_use]
pub fn never_fails<T: ?Sized>() -> NeverFails<T> {
    NeverFails::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    #[test]
    fn empty_string_passes() {
        assert!(empty().validate("").is_ok());
    }

    #[test]
    fn non_empty_string_fails_with_empty_message() {
        let err = empty().validate("foo").unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["empty"]);
    }

    #[test]
    fn empty_slice_passes() {
        let values: &[i32] = &[];
        assert!(empty().validate(values).is_ok());
    }

    #[test]
    fn not_empty_inverse_message() {
        let err = empty().not().validate("").unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["not empty"]);
    }

    #[test]
    fn never_fails_accepts_anything() {
        assert!(never_fails().validate("").is_ok());
        assert!(never_fails().validate(&42).is_ok());
    }

    #[test]
    fn negated_never_fails_always_fails() {
        let err = never_fails().not().validate("anything").unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["never fails"]);
    }
}
