//! Prelude module for convenient imports
//!
//! Brings the core traits, the error type, every built-in validator factory
//! and the combinator types into scope with a single glob import.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = empty().not().and(count(3..=20)).and(alphanumeric());
//! assert!(validator.validate("alice").is_ok());
//! ```

// Core traits and error type
pub use crate::foundation::{Validate, ValidateExt, ValidationError};

// Sequence counting support
pub use crate::foundation::{Countable, ElementNoun};

// Bound descriptions
pub use crate::bounds::RangeSpec;

// Built-in validators
pub use crate::validators::{
    CharSet, CharacterSet, Count, Email, Empty, FromFn, InRange, IsNone, NeverFails, OneOf,
    Predicate, Url, alphanumeric, ascii, char_set, count, email, empty, from_fn, in_range,
    is_none, never_fails, one_of, predicate, url,
};

// Combinators
pub use crate::combinators::{
    And, AndAll, Not, Optional, Or, OrAny, Prefixed, WithMessage, and_all, optional, or_any,
};
