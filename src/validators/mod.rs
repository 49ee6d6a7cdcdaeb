//! Built-in leaf validators
//!
//! Each leaf validator is a small struct implementing
//! [`Validate`](crate::foundation::Validate), paired with a lowercase
//! factory function. Leaves originate error messages; the
//! [`combinators`](crate::combinators) only transform them.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! // Sequence validation
//! let username = empty().not().and(count(3..=20)).and(alphanumeric());
//!
//! // Numeric validation
//! let age = in_range(18..=100);
//!
//! // Membership
//! let plan = one_of(["free", "pro"]);
//!
//! // Optional bridging
//! let homepage = optional(url()).or(is_none::<String>());
//! ```

// Sequence validators
pub mod count;
pub mod empty;

// Comparable-value validators
pub mod range;

// Membership validators
pub mod charset;
pub mod one_of;

// String content validators
pub mod content;

// Option validators
pub mod nullable;

// Ad-hoc validators
pub mod adhoc;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use adhoc::{FromFn, Predicate, from_fn, predicate};
pub use charset::{CharSet, CharacterSet, alphanumeric, ascii, char_set};
pub use content::{Email, Url, email, url};
pub use count::{Count, count};
pub use empty::{Empty, NeverFails, empty, never_fails};
pub use nullable::{IsNone, is_none};
pub use one_of::{OneOf, one_of};
pub use range::{InRange, in_range};
