//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! // Both validators must pass
//! let validator = And::new(count(5..=20), alphanumeric());
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err()); // fails the count rule
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed. Both
/// sides are always evaluated — there is no short-circuit — so that one
/// pass over the input surfaces every independent failure. When both sides
/// fail, the messages concatenate left-then-right.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = And::new(count(5..=10), alphanumeric());
///
/// // Both conditions satisfied
/// assert!(validator.validate("hello").is_ok());
///
/// // Both conditions violated: both messages are reported
/// let err = validator.validate("a_b").unwrap_err();
/// assert_eq!(err.message_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to apply
    /// * `right` - The second validator to apply
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        // Evaluate both sides unconditionally so independent failures are
        // all visible in a single pass.
        match (self.left.validate(input), self.right.validate(input)) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(left), Ok(())) => Err(left),
            (Ok(()), Err(right)) => Err(right),
            (Err(left), Err(right)) => Err(left.merge(right)),
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "{} and {}",
            self.left.failure_text(),
            self.right.failure_text()
        ))
    }
}

impl<L, R> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with AND logic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::prelude::*;
    ///
    /// let validator = count(5..).and(alphanumeric()).and(empty().not());
    /// assert!(validator.validate("hello").is_ok());
    /// ```
    pub fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        And::new(self, other)
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::and;
/// use validus::prelude::*;
///
/// let validator = and(count(5..=10), alphanumeric());
/// assert!(validator.validate("hello").is_ok());
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of validators.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::and_all;
/// use validus::prelude::*;
///
/// let validators = vec![count(3..), count(5..), count(7..)];
/// let validator = and_all(validators);
/// assert!(validator.validate("helloworld").is_ok());
/// assert!(validator.validate("hello").is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines multiple validators with logical AND.
///
/// Like [`And`], every validator in the collection is evaluated and all
/// failures are concatenated in declaration order.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failure: Option<ValidationError> = None;
        for validator in &self.validators {
            if let Err(error) = validator.validate(input) {
                failure = Some(match failure {
                    Some(collected) => collected.merge(error),
                    None => error,
                });
            }
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        let texts: Vec<String> = self
            .validators
            .iter()
            .map(|v| v.failure_text().into_owned())
            .collect();
        Cow::Owned(texts.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{alphanumeric, count, predicate};

    #[test]
    fn and_both_pass() {
        let validator = And::new(count::<str>(5..=10), alphanumeric());
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn and_left_fails() {
        let validator = And::new(count::<str>(5..=10), alphanumeric());
        let err = validator.validate("hi").unwrap_err();
        assert_eq!(
            err.messages().collect::<Vec<_>>(),
            vec!["count: between 5 and 10 characters"]
        );
    }

    #[test]
    fn and_both_fail_concatenates_left_then_right() {
        let validator = And::new(count::<str>(5..=10), alphanumeric());
        let err = validator.validate("a_b").unwrap_err();
        assert_eq!(
            err.messages().collect::<Vec<_>>(),
            vec![
                "count: between 5 and 10 characters",
                "invalid character: '_' (allowed: A-Z, a-z, 0-9)",
            ]
        );
    }

    #[test]
    fn and_evaluates_both_sides() {
        use std::cell::Cell;

        let right_ran = Cell::new(false);
        let left = predicate("left", |_: &str| false);
        let right = predicate("right", |_: &str| {
            right_ran.set(true);
            false
        });
        assert!(left.and(right).validate("x").is_err());
        assert!(right_ran.get(), "right side must run even after left fails");
    }

    #[test]
    fn and_chain() {
        let validator = count::<str>(3..)
            .and(count(..=10))
            .and(count(5..));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn and_failure_text() {
        let validator = And::new(
            predicate("is foo", |s: &str| s == "foo"),
            predicate("is short", |s: &str| s.len() < 4),
        );
        assert_eq!(validator.failure_text(), "is foo and is short");
    }

    #[test]
    fn and_all_collects_every_failure() {
        let validators = vec![
            count::<str>(3..),
            count(5..),
            count(7..),
        ];
        let combined = and_all(validators);
        assert!(combined.validate("helloworld").is_ok());

        let err = combined.validate("hi").unwrap_err();
        assert_eq!(err.message_count(), 3);
    }
}
