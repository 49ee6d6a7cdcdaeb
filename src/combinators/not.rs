//! NOT combinator - logical negation of a validator
//!
//! This module provides the [`Not`] combinator which inverts the result of
//! a validator - it succeeds when the inner validator fails and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = Not::new(empty());
//! assert!(validator.validate("hello").is_ok());
//!
//! let err = validator.validate("").unwrap_err();
//! assert_eq!(err.messages().next(), Some("not empty"));
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// Succeeds exactly when the inner validator fails. When the inner validator
/// would have succeeded, the failure carries the inner validator's
/// [`negated_text`](Validate::negated_text) — a single message whose wording
/// is fixed at construction time, never derived from the rejected value.
///
/// Negating a negation restores the original description: `Not<Not<V>>`
/// reports `V`'s own failure text again.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The validator being negated.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(self.inner.negated_text())),
            Err(_) => Ok(()),
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        self.inner.negated_text()
    }

    fn negated_text(&self) -> Cow<'static, str> {
        // Double negation reports the inner validator's own text.
        self.inner.failure_text()
    }
}

/// Creates a `Not` combinator from a validator.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::not;
/// use validus::prelude::*;
///
/// let validator = not(empty());
/// assert!(validator.validate("hello").is_ok());
/// ```
pub fn not<V>(inner: V) -> Not<V>
where
    V: Validate,
{
    Not::new(inner)
}
