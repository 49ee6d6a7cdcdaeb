//! Optional combinator - lifting validators over `Option`
//!
//! This module provides the [`Optional`] combinator which adapts a validator
//! for `T` into a validator for `Option<T>` where `None` always passes.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = email().optional::<String>();
//!
//! assert!(validator.validate(&None).is_ok());
//! assert!(validator.validate(&Some("user@example.com".to_string())).is_ok());
//! assert!(validator.validate(&Some("oops".to_string())).is_err());
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Lifts a validator over `Option`, treating `None` as success.
///
/// `Some(value)` is validated by the inner validator; `None` passes
/// unconditionally. Rejecting absent values is out of this combinator's
/// scope - compose [`is_none`](crate::validators::is_none) (or its
/// negation) alongside instead.
///
/// The carried type `T` borrows as the inner validator's input, which lets
/// a `str`-input validator run over `Option<String>`.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
/// * `T` - The owned type carried inside the `Option`
pub struct Optional<V, T> {
    /// The validator applied to present values.
    pub(crate) inner: V,
    _marker: PhantomData<fn(&T)>,
}

impl<V, T> Optional<V, T> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
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

impl<V: fmt::Debug, T> fmt::Debug for Optional<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional").field("inner", &self.inner).finish()
    }
}

impl<V: Clone, T> Clone for Optional<V, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<V: Copy, T> Copy for Optional<V, T> {}

impl<V, T> Validate for Optional<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            Some(value) => self.inner.validate(value.borrow()),
            None => Ok(()),
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        self.inner.failure_text()
    }

    fn negated_text(&self) -> Cow<'static, str> {
        self.inner.negated_text()
    }
}

/// Creates an `Optional` combinator from a validator.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::optional;
/// use validus::prelude::*;
///
/// let validator = optional::<_, String>(email());
/// assert!(validator.validate(&None).is_ok());
/// ```
pub fn optional<V, T>(inner: V) -> Optional<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    Optional::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{email, is_none};

    #[test]
    fn none_always_passes() {
        let validator = email().optional::<String>();
        assert!(validator.validate(&None).is_ok());
    }

    #[test]
    fn some_defers_to_inner() {
        let validator = email().optional::<String>();
        assert!(validator.validate(&Some("user@example.com".to_string())).is_ok());

        let err = validator
            .validate(&Some("oops".to_string()))
            .unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["invalid email"]);
    }

    #[test]
    fn composes_with_nil_check_for_required_fields() {
        // "Present and valid": reject None explicitly.
        let validator = email().optional::<String>().and(is_none().not());

        assert!(validator.validate(&Some("user@example.com".to_string())).is_ok());

        let err = validator.validate(&None).unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["not nil"]);

        let err = validator.validate(&Some("oops".to_string())).unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["invalid email"]);
    }

    #[test]
    fn texts_delegate_to_inner() {
        let validator = email().optional::<String>();
        assert_eq!(validator.failure_text(), "invalid email");
        assert_eq!(validator.negated_text(), "valid email");
    }
}
