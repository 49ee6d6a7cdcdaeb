//! Message override combinator
//!
//! This module provides the [`WithMessage`] combinator which replaces every
//! failure message produced by the inner validator with a custom one.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = email().with_message("please enter a valid email address");
//!
//! let err = validator.validate("oops").unwrap_err();
//! assert_eq!(
//!     err.messages().next(),
//!     Some("please enter a valid email address"),
//! );
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces every failure message with a custom one.
///
/// Each message in the inner failure is substituted individually, so the
/// message count is preserved: a three-message composite failure becomes
/// three copies of the custom string. Pass/fail behavior is untouched.
///
/// The negated description is left untouched: negating the combined
/// validator reports the base validator's own negated text unless
/// [`with_negated`](WithMessage::with_negated) overrides it.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithMessage<V> {
    /// The validator whose messages are overridden.
    pub(crate) inner: V,
    /// The replacement message.
    pub(crate) message: Cow<'static, str>,
    /// Optional replacement for the base's negated text.
    pub(crate) negated: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            negated: None,
        }
    }

    /// Overrides the text reported when this validator is negated.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_negated(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.negated = Some(text.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|error| error.map_messages(|_| self.message.clone()))
    }

    fn failure_text(&self) -> Cow<'static, str> {
        self.message.clone()
    }

    fn negated_text(&self) -> Cow<'static, str> {
        match &self.negated {
            Some(text) => text.clone(),
            None => self.inner.negated_text(),
        }
    }
}

/// Creates a `WithMessage` combinator from a validator and a message.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::with_message;
/// use validus::prelude::*;
///
/// let validator = with_message(count(8..), "password is too short");
/// assert!(validator.validate("longenough").is_ok());
/// ```
pub fn with_message<V>(inner: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V>
where
    V: Validate,
{
    WithMessage::new(inner, message)
}
