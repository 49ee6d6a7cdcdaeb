//! Range descriptors with human-readable rendering
//!
//! [`RangeSpec`] is a small closed algebra over "has-a-minimum /
//! has-a-maximum" bounds, shared by the count and numeric-range validators.
//! It converts from the standard library range types, so validator
//! factories accept `3..=5`, `3..`, `..=5` and `3..5` directly.
//!
//! A half-open upper bound is adjusted to an inclusive maximum by one unit
//! step at construction, so `3..5` renders and behaves identically to
//! `3..=4`.

use std::fmt::Display;
use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};

// ============================================================================
// UNIT STEP
// ============================================================================

/// Types whose half-open upper bound can be adjusted by one unit step.
///
/// Implemented for the primitive integer types. The adjustment is the
/// type's own unit step, not a fixed constant, so the conversion stays
/// correct for any steppable type that implements this trait.
pub trait UnitStep {
    /// Returns the value one unit step below `self`.
    ///
    /// # Panics
    ///
    /// Panics if the result is not representable (e.g. `0u32.down_one()`).
    /// This surfaces construction-time misuse immediately rather than
    /// during evaluation.
    #[must_use]
    fn down_one(self) -> Self;
}

macro_rules! impl_unit_step {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl UnitStep for $ty {
                fn down_one(self) -> Self {
                    self.checked_sub(1)
                        .expect("half-open range upper bound has no predecessor")
                }
            }
        )+
    };
}

impl_unit_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// RANGE SPEC
// ============================================================================

/// A described range of values: closed, half-open, or one-sided.
///
/// Exactly one of {min present, max present, both present} holds per
/// variant. `HalfOpen` stores its upper bound already adjusted to
/// inclusive, so comparison and rendering treat it exactly like `Closed`.
///
/// # Examples
///
/// ```rust
/// use validus::bounds::RangeSpec;
///
/// let spec = RangeSpec::from(3..5);
/// assert_eq!(spec.render(), "between 3 and 4");
/// assert!(spec.contains(&4));
/// assert!(!spec.contains(&5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSpec<T> {
    /// Both bounds, inclusive: `min..=max`.
    Closed {
        /// Inclusive lower bound.
        min: T,
        /// Inclusive upper bound.
        max: T,
    },
    /// Lower bound only: `min..`.
    AtLeast {
        /// Inclusive lower bound.
        min: T,
    },
    /// Upper bound only: `..=max`.
    AtMost {
        /// Inclusive upper bound.
        max: T,
    },
    /// Originally half-open `min..max`; `max` is stored inclusive-adjusted.
    HalfOpen {
        /// Inclusive lower bound.
        min: T,
        /// Upper bound, already adjusted down by one unit step.
        max: T,
    },
}

impl<T> RangeSpec<T> {
    /// The inclusive lower bound, if this variant has one.
    pub fn min(&self) -> Option<&T> {
        match self {
            Self::Closed { min, .. } | Self::AtLeast { min } | Self::HalfOpen { min, .. } => {
                Some(min)
            }
            Self::AtMost { .. } => None,
        }
    }

    /// The inclusive upper bound, if this variant has one.
    pub fn max(&self) -> Option<&T> {
        match self {
            Self::Closed { max, .. } | Self::AtMost { max } | Self::HalfOpen { max, .. } => {
                Some(max)
            }
            Self::AtLeast { .. } => None,
        }
    }
}

impl<T: PartialOrd> RangeSpec<T> {
    /// Whether `value` satisfies every present bound.
    pub fn contains(&self, value: &T) -> bool {
        let above_min = self.min().is_none_or(|min| value >= min);
        let below_max = self.max().is_none_or(|max| value <= max);
        above_min && below_max
    }
}

impl<T: Display> RangeSpec<T> {
    /// Renders the range for error messages.
    ///
    /// `Closed` and `HalfOpen` render as `between <min> and <max>`,
    /// `AtLeast` as `at least <min>`, `AtMost` as `at most <max>`.
    pub fn render(&self) -> String {
        self.render_with(|bound| bound.to_string())
    }

    /// Renders the range, applying `describe` to the trailing bound.
    ///
    /// The count validator uses this to attach the element noun to the last
    /// number of the message (`between 0 and 1 character`,
    /// `at least 3 characters`).
    pub fn render_with(&self, describe: impl Fn(&T) -> String) -> String {
        match self {
            Self::Closed { min, max } | Self::HalfOpen { min, max } => {
                format!("between {min} and {}", describe(max))
            }
            Self::AtLeast { min } => format!("at least {}", describe(min)),
            Self::AtMost { max } => format!("at most {}", describe(max)),
        }
    }
}

// ============================================================================
// CONVERSIONS FROM STD RANGES
// ============================================================================

impl<T: PartialOrd> From<RangeInclusive<T>> for RangeSpec<T> {
    /// # Panics
    ///
    /// Panics if the range is inverted (`min > max`).
    fn from(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        assert!(min <= max, "range minimum exceeds maximum");
        Self::Closed { min, max }
    }
}

impl<T> From<RangeFrom<T>> for RangeSpec<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::AtLeast { min: range.start }
    }
}

impl<T> From<RangeToInclusive<T>> for RangeSpec<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::AtMost { max: range.end }
    }
}

impl<T: PartialOrd + UnitStep> From<Range<T>> for RangeSpec<T> {
    /// # Panics
    ///
    /// Panics if the range is empty after the upper bound is adjusted to
    /// inclusive (e.g. `3..3`).
    fn from(range: Range<T>) -> Self {
        let min = range.start;
        let max = range.end.down_one();
        assert!(min <= max, "half-open range is empty");
        Self::HalfOpen { min, max }
    }
}

impl<T: UnitStep> From<RangeTo<T>> for RangeSpec<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self::AtMost {
            max: range.end.down_one(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_range() {
        let spec = RangeSpec::from(3..=5);
        assert!(spec.contains(&3));
        assert!(spec.contains(&5));
        assert!(!spec.contains(&2));
        assert!(!spec.contains(&6));
        assert_eq!(spec.render(), "between 3 and 5");
    }

    #[test]
    fn half_open_adjusts_upper_bound() {
        let spec = RangeSpec::from(3..5);
        assert!(spec.contains(&4));
        assert!(!spec.contains(&5));
        assert_eq!(spec.render(), "between 3 and 4");
    }

    #[test]
    fn one_sided_ranges() {
        let at_least = RangeSpec::from(3..);
        assert!(at_least.contains(&1000));
        assert!(!at_least.contains(&2));
        assert_eq!(at_least.render(), "at least 3");

        let at_most = RangeSpec::from(..=5);
        assert!(at_most.contains(&0));
        assert!(!at_most.contains(&6));
        assert_eq!(at_most.render(), "at most 5");
    }

    #[test]
    fn exclusive_upper_only() {
        let spec = RangeSpec::from(..5);
        assert!(spec.contains(&4));
        assert!(!spec.contains(&5));
        assert_eq!(spec.render(), "at most 4");
    }

    #[test]
    fn render_with_describes_trailing_bound_only() {
        let spec = RangeSpec::from(3..=5);
        assert_eq!(
            spec.render_with(|n| format!("{n} characters")),
            "between 3 and 5 characters"
        );
        let at_least = RangeSpec::from(3..);
        assert_eq!(
            at_least.render_with(|n| format!("{n} characters")),
            "at least 3 characters"
        );
    }

    #[test]
    #[should_panic(expected = "range minimum exceeds maximum")]
    fn inverted_range_panics_at_construction() {
        let _ = RangeSpec::from(5..=3);
    }

    #[test]
    #[should_panic(expected = "half-open range is empty")]
    fn empty_half_open_range_panics_at_construction() {
        let _ = RangeSpec::from(3..3);
    }
}
