//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the
//! combined validator to succeed.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = Or::new(empty(), email());
//! assert!(validator.validate("").is_ok());
//! assert!(validator.validate("user@example.com").is_ok());
//! assert!(validator.validate("not-an-email").is_err());
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Evaluation short-circuits: if the left validator passes, the right one
/// is never run. Only when both fail does the combined validator fail, with
/// the messages of both branches concatenated left-then-right.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(error) => error,
        };
        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right) => Err(left.merge(right)),
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "{} or {}",
            self.left.failure_text(),
            self.right.failure_text()
        ))
    }
}

impl<L, R> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with OR logic.
    pub fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        Or::new(self, other)
    }
}

/// Creates an `Or` combinator from two validators.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::or;
/// use validus::prelude::*;
///
/// let validator = or(empty(), email());
/// assert!(validator.validate("").is_ok());
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Creates an `OrAny` combinator from a vector of validators.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::or_any;
/// use validus::prelude::*;
///
/// let validator = or_any(vec![one_of(["red"]), one_of(["green"]), one_of(["blue"])]);
/// assert!(validator.validate(&"green").is_ok());
/// assert!(validator.validate(&"mauve").is_err());
/// ```
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

/// Combines multiple validators with logical OR.
///
/// Succeeds on the first passing validator; later validators are not run.
/// If every validator fails, the failures concatenate in declaration order.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failure: Option<ValidationError> = None;
        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    failure = Some(match failure {
                        Some(collected) => collected.merge(error),
                        None => error,
                    });
                }
            }
        }
        match failure {
            Some(error) => Err(error),
            // An empty disjunction has nothing to reject.
            None => Ok(()),
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        let texts: Vec<String> = self
            .validators
            .iter()
            .map(|v| v.failure_text().into_owned())
            .collect();
        Cow::Owned(texts.join(" or "))
    }
}
