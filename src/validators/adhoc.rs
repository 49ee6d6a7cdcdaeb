//! Ad-hoc validators built from closures
//!
//! These are the factory forms for one-off rules: [`predicate`] wraps a
//! boolean closure with a message (or message list), [`from_fn`] wraps a
//! fallible closure that raises its own `ValidationError` so a single leaf
//! can produce a multi-message failure.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PREDICATE
// ============================================================================

/// A validator built from a boolean predicate and static message text.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let is_foo = predicate("is foo", |s: &str| s == "foo");
/// assert!(is_foo.validate("foo").is_ok());
///
/// let err = is_foo.validate("bar").unwrap_err();
/// assert_eq!(err.messages().next(), Some("is foo"));
/// ```
pub struct Predicate<I: ?Sized, F> {
    messages: SmallVec<[Cow<'static, str>; 2]>,
    negated: Option<Cow<'static, str>>,
    check: F,
    _marker: PhantomData<fn(&I)>,
}

impl<I: ?Sized, F> Predicate<I, F>
where
    F: Fn(&I) -> bool,
{
    /// Creates a predicate validator with a single failure message.
    pub fn new(message: impl Into<Cow<'static, str>>, check: F) -> Self {
        let mut messages = SmallVec::new();
        messages.push(message.into());
        Self {
            messages,
            negated: None,
            check,
            _marker: PhantomData,
        }
    }

    /// Creates a predicate validator that emits several messages at once.
    ///
    /// # Panics
    ///
    /// Panics if `messages` is empty (a failure must carry at least one
    /// message).
    pub fn with_messages(
        messages: impl IntoIterator<Item = Cow<'static, str>>,
        check: F,
    ) -> Self {
        let messages: SmallVec<[Cow<'static, str>; 2]> = messages.into_iter().collect();
        assert!(
            !messages.is_empty(),
            "predicate requires at least one failure message"
        );
        Self {
            messages,
            negated: None,
            check,
            _marker: PhantomData,
        }
    }

    /// Overrides the text reported when this validator is negated.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_negated_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.negated = Some(text.into());
        self
    }
}

impl<I: ?Sized, F> fmt::Debug for Predicate<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl<I: ?Sized, F: Clone> Clone for Predicate<I, F> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            negated: self.negated.clone(),
            check: self.check.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I: ?Sized, F> Validate for Predicate<I, F>
where
    F: Fn(&I) -> bool,
{
    type Input = I;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.check)(input) {
            return Ok(());
        }
        let mut error = ValidationError::new(self.messages[0].clone());
        for message in &self.messages[1..] {
            error = error.with_message(message.clone());
        }
        Err(error)
    }

    fn failure_text(&self) -> Cow<'static, str> {
        if self.messages.len() == 1 {
            self.messages[0].clone()
        } else {
            Cow::Owned(self.messages.join("; "))
        }
    }

    fn negated_text(&self) -> Cow<'static, str> {
        match &self.negated {
            Some(text) => text.clone(),
            None => Cow::Owned(format!("not {}", self.failure_text().to_lowercase())),
        }
    }
}

/// Creates a [`Predicate`] validator.
pub fn predicate<I: ?Sized, F>(message: impl Into<Cow<'static, str>>, check: F) -> Predicate<I, F>
where
    F: Fn(&I) -> bool,
{
    Predicate::new(message, check)
}

// ============================================================================
// FROM FN
// ============================================================================

/// A validator built from a fallible evaluation closure.
///
/// Unlike [`Predicate`], the closure constructs the failure itself, so it
/// can raise a multi-message `ValidationError` or vary the message by
/// input.
///
/// ```rust
/// use validus::prelude::*;
/// use validus::foundation::ValidationError;
///
/// let no_tabs = from_fn("no tabs", |s: &str| {
///     match s.find('\t') {
///         None => Ok(()),
///         Some(at) => Err(ValidationError::new(format!("tab at byte {at}"))),
///     }
/// });
/// assert!(no_tabs.validate("plain").is_ok());
/// assert!(no_tabs.validate("a\tb").is_err());
/// ```
pub struct FromFn<I: ?Sized, F> {
    text: Cow<'static, str>,
    run: F,
    _marker: PhantomData<fn(&I)>,
}

impl<I: ?Sized, F> FromFn<I, F>
where
    F: Fn(&I) -> Result<(), ValidationError>,
{
    /// Creates a validator from a fallible closure.
    ///
    /// `text` is the static failure description used by the NOT combinator
    /// and by error construction for callers that only need the template.
    pub fn new(text: impl Into<Cow<'static, str>>, run: F) -> Self {
        Self {
            text: text.into(),
            run,
            _marker: PhantomData,
        }
    }
}

impl<I: ?Sized, F> fmt::Debug for FromFn<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl<I: ?Sized, F: Clone> Clone for FromFn<I, F> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            run: self.run.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I: ?Sized, F> Validate for FromFn<I, F>
where
    F: Fn(&I) -> Result<(), ValidationError>,
{
    type Input = I;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (self.run)(input)
    }

    fn failure_text(&self) -> Cow<'static, str> {
        self.text.clone()
    }
}

/// Creates a [`FromFn`] validator.
pub fn from_fn<I: ?Sized, F>(text: impl Into<Cow<'static, str>>, run: F) -> FromFn<I, F>
where
    F: Fn(&I) -> Result<(), ValidationError>,
{
    FromFn::new(text, run)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    #[test]
    fn predicate_pass_and_fail() {
        let validator = predicate("is foo", |s: &str| s == "foo");
        assert!(validator.validate("foo").is_ok());

        let err = validator.validate("bar").unwrap_err();
        assert_eq!(err.messages().collect::<Vec<_>>(), vec!["is foo"]);
    }

    #[test]
    fn predicate_multi_message() {
        let validator = Predicate::with_messages(
            [Cow::Borrowed("too plain"), Cow::Borrowed("needs a digit")],
            |s: &str| s.chars().any(|c| c.is_ascii_digit()),
        );
        let err = validator.validate("password").unwrap_err();
        assert_eq!(
            err.messages().collect::<Vec<_>>(),
            vec!["too plain", "needs a digit"]
        );
    }

    #[test]
    fn predicate_negated_text_override() {
        let validator = predicate("is foo", |s: &str| s == "foo").with_negated_text("is not foo");
        let err = validator.not().validate("foo").unwrap_err();
        assert_eq!(err.messages().next(), Some("is not foo"));
    }

    #[test]
    fn from_fn_raises_its_own_error() {
        let validator = from_fn("even", |n: &i32| {
            if n % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::new(format!("{n} is odd")))
            }
        });
        assert!(validator.validate(&4).is_ok());

        let err = validator.validate(&3).unwrap_err();
        assert_eq!(err.messages().next(), Some("3 is odd"));
    }
}
