//! Element-count validators for sequence-like inputs

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::bounds::RangeSpec;
use crate::foundation::{Countable, Validate, ValidationError};

/// Validates that a sequence's element count falls within a range.
///
/// Accepts any standard range expression; a half-open range behaves like
/// the equivalent closed range (`3..5` ≡ `3..=4`). The error message names
/// the element noun of the input type — characters for strings, items for
/// collections — singular when the bound is exactly 1.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = count(3..=5);
/// assert!(validator.validate("123").is_ok());
///
/// let err = validator.validate("12").unwrap_err();
/// assert_eq!(
///     err.messages().next(),
///     Some("count: between 3 and 5 characters"),
/// );
/// ```
pub struct Count<T: ?Sized> {
    spec: RangeSpec<usize>,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Count<T> {
    /// Creates a count validator from a range expression.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or empty (construction-time misuse).
    #[must_use]
    pub fn new(range: impl Into<RangeSpec<usize>>) -> Self {
        Self {
            spec: range.into(),
            _marker: PhantomData,
        }
    }

    /// The configured bounds.
    pub fn spec(&self) -> &RangeSpec<usize> {
        &self.spec
    }
}

impl<T: ?Sized> fmt::Debug for Count<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Count").field("spec", &self.spec).finish()
    }
}

impl<T: ?Sized> Clone for Count<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Count<T> {}

impl<T: Countable + ?Sized> Validate for Count<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.spec.contains(&input.count()) {
            Ok(())
        } else {
            Err(ValidationError::new(self.failure_text()))
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        let rendered = self.spec.render_with(|n| T::NOUN.counted(*n));
        Cow::Owned(format!("count: {rendered}"))
    }
}

/// Creates a [`Count`] validator from a range expression.
///
/// ```rust
/// use validus::prelude::*;
///
/// let at_least = count(3..);
/// assert!(at_least.validate("123").is_ok());
///
/// let err = at_least.validate("12").unwrap_err();
/// assert_eq!(err.messages().next(), Some("count: at least 3 characters"));
/// ```
///
/// # Panics
///
/// Panics if the range is inverted or empty.
#[must_use]
pub fn count<T: Countable + ?Sized>(range: impl Into<RangeSpec<usize>>) -> Count<T> {
    Count::new(range)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn first_message(err: &ValidationError) -> String {
        err.messages().next().unwrap_or_default().to_string()
    }

    #[test]
    fn closed_range_on_string() {
        let validator = count(3..=5);
        assert!(validator.validate("123").is_ok());

        let err = validator.validate("12").unwrap_err();
        assert_eq!(first_message(&err), "count: between 3 and 5 characters");

        let err = validator.validate("123456").unwrap_err();
        assert_eq!(first_message(&err), "count: between 3 and 5 characters");
    }

    #[test]
    fn at_least() {
        let validator = count(3..);
        assert!(validator.validate("123").is_ok());

        let err = validator.validate("12").unwrap_err();
        assert_eq!(first_message(&err), "count: at least 3 characters");
    }

    #[test]
    fn at_most() {
        let validator = count(..=5);
        for value in ["", "1", "12345"] {
            assert!(validator.validate(value).is_ok());
        }

        let err = validator.validate("123456").unwrap_err();
        assert_eq!(first_message(&err), "count: at most 5 characters");
    }

    #[test]
    fn half_open_behaves_like_adjusted_closed() {
        let validator = count(3..5);
        assert!(validator.validate("123").is_ok());
        assert!(validator.validate("1234").is_ok());

        let err = validator.validate("12345").unwrap_err();
        assert_eq!(first_message(&err), "count: between 3 and 4 characters");
    }

    #[test]
    fn collection_uses_item_noun() {
        let validator = count(2..=5);
        let err = validator.validate(&["foo"][..]).unwrap_err();
        assert_eq!(first_message(&err), "count: between 2 and 5 items");
    }

    #[test]
    fn singular_noun_for_one() {
        let validator = count(0..=1);
        let err = validator.validate(&["foo", "bar"][..]).unwrap_err();
        assert_eq!(first_message(&err), "count: between 0 and 1 item");

        let validator = count(0..=1);
        let err = validator.validate("foo").unwrap_err();
        assert_eq!(first_message(&err), "count: between 0 and 1 character");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let validator = count(..=2);
        assert!(validator.validate("héé").is_err());
        assert!(validator.validate("hé").is_ok());
    }
}
