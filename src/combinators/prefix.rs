//! Prefix combinator
//!
//! This module provides the [`Prefixed`] combinator which prepends a fixed
//! prefix to every failure message of the inner validator.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = email().prefixed("email: ");
//!
//! let err = validator.validate("oops").unwrap_err();
//! assert_eq!(err.messages().next(), Some("email: invalid email"));
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Prepends a fixed prefix to every failure message.
///
/// The prefix is concatenated literally - no separator is inserted, so
/// callers that want a space or colon include it in the prefix string.
/// The prefix also applies to the validator's declared failure and negated
/// texts, so negating a prefixed validator keeps the prefix.
///
/// For a transient, call-scoped prefix (joined with a space, not baked into
/// the validator) use
/// [`validate_prefixed`](crate::foundation::Validate::validate_prefixed)
/// instead.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixed<V> {
    /// The prefix prepended to each message.
    pub(crate) prefix: Cow<'static, str>,
    /// The validator whose messages are prefixed.
    pub(crate) inner: V,
}

impl<V> Prefixed<V> {
    /// Creates a new `Prefixed` combinator.
    pub fn new(prefix: impl Into<Cow<'static, str>>, inner: V) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    /// Returns the prefix string.
    pub fn prefix(&self) -> &str {
        &self.prefix
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

impl<V> Validate for Prefixed<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|error| {
            error.map_messages(|message| Cow::Owned(format!("{}{message}", self.prefix)))
        })
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}{}", self.prefix, self.inner.failure_text()))
    }

    fn negated_text(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}{}", self.prefix, self.inner.negated_text()))
    }
}

/// Creates a `Prefixed` combinator from a prefix and a validator.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::prefixed;
/// use validus::prelude::*;
///
/// let validator = prefixed("name: ", empty().not());
/// let err = validator.validate("").unwrap_err();
/// assert_eq!(err.messages().next(), Some("name: not empty"));
/// ```
pub fn prefixed<V>(prefix: impl Into<Cow<'static, str>>, inner: V) -> Prefixed<V>
where
    V: Validate,
{
    Prefixed::new(prefix, inner)
}
