//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API: `Ok(())` is the
/// success outcome, `Err` carries the ordered, non-empty message list.
///
/// Besides the evaluation itself, every validator exposes two pieces of
/// static description text:
///
/// - [`failure_text`](Validate::failure_text) — the message template used
///   when this validator, taken alone, fails,
/// - [`negated_text`](Validate::negated_text) — what the NOT combinator
///   reports when this validator would have succeeded. Unless overridden it
///   derives as `"not "` + the lowercased failure text.
///
/// Validators are immutable: all configuration (bounds, sets, candidate
/// lists, nested validators) is captured at construction and never re-read
/// from mutable external state, so `validate` is a pure function and any
/// validator can be shared across threads without synchronization.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use validus::foundation::{Validate, ValidationError};
///
/// struct IsFoo;
///
/// impl Validate for IsFoo {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input == "foo" {
///             Ok(())
///         } else {
///             Err(ValidationError::new(self.failure_text()))
///         }
///     }
///
///     fn failure_text(&self) -> Cow<'static, str> {
///         Cow::Borrowed("is foo")
///     }
/// }
///
/// assert!(IsFoo.validate("foo").is_ok());
/// assert_eq!(IsFoo.negated_text(), "not is foo");
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` with at least one message if it fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// The message template used when this validator, taken alone, fails.
    fn failure_text(&self) -> Cow<'static, str>;

    /// The message describing "successfully violating this rule".
    ///
    /// The NOT combinator reports this text when the base validator would
    /// have succeeded. The text is fixed at construction time, independent
    /// of the value being tested.
    fn negated_text(&self) -> Cow<'static, str> {
        Cow::Owned(format!("not {}", self.failure_text().to_lowercase()))
    }

    /// Validates with a transient, call-scoped message prefix.
    ///
    /// On failure, `prefix` and each message are joined with a single
    /// space. An empty prefix leaves the messages untouched. This never
    /// alters the validator or its statically-declared text — use the
    /// [`Prefixed`](crate::combinators::Prefixed) combinator to bake a
    /// prefix in permanently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::prelude::*;
    ///
    /// let err = email().validate_prefixed("invalid", "Required:").unwrap_err();
    /// assert_eq!(err.messages().next(), Some("Required: invalid email"));
    /// ```
    fn validate_prefixed(
        &self,
        input: &Self::Input,
        prefix: &str,
    ) -> Result<(), ValidationError> {
        match self.validate(input) {
            Ok(()) => Ok(()),
            Err(error) if prefix.is_empty() => Err(error),
            Err(error) => Err(error.map_messages(|m| Cow::Owned(format!("{prefix} {m}")))),
        }
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// [`Validate`], providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = empty().not().and(count(3..=20)).and(alphanumeric());
///
/// assert!(validator.validate("alice").is_ok());
/// assert!(validator.validate("").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators are always evaluated — there is no short-circuit —
    /// so independent error sets are visible in one pass. Failure messages
    /// concatenate left-then-right.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success; if both fail, the messages of
    /// both branches are concatenated left-then-right.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// Succeeds when the base fails; when the base succeeds, fails with the
    /// base's statically-known [`negated_text`](Validate::negated_text).
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Replaces every failure message with a custom one.
    ///
    /// The message count is preserved so that composed failures collapse to
    /// repeated copies of a single user-facing string.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Prepends a fixed prefix to every failure message.
    fn prefixed(self, prefix: impl Into<Cow<'static, str>>) -> Prefixed<Self> {
        Prefixed::new(prefix, self)
    }

    /// Lifts the validator over `Option`, treating `None` as success.
    ///
    /// Nil-handling is deferred to [`is_none`](crate::validators::is_none)
    /// (or its negation) composed alongside.
    fn optional<T>(self) -> Optional<Self, T>
    where
        T: std::borrow::Borrow<Self::Input>,
    {
        Optional::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::prefix::Prefixed;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }

        fn failure_text(&self) -> Cow<'static, str> {
            Cow::Borrowed("Always valid")
        }
    }

    #[test]
    fn validate_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn negated_text_derives_from_failure_text() {
        assert_eq!(AlwaysValid.negated_text(), "not always valid");
    }

    #[test]
    fn transient_prefix_is_a_noop_on_success() {
        assert!(AlwaysValid.validate_prefixed("test", "Required:").is_ok());
    }
}
