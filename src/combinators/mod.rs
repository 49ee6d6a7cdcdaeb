//! Validator combinators
//!
//! This module provides combinators for composing validators into complex
//! validation logic. Each combinator wraps one or two validators and is
//! itself a validator, so compositions nest arbitrarily.
//!
//! # Available Combinators
//!
//! - [`And`] - logical AND, both sides always evaluated, failures concatenate
//! - [`Or`] - logical OR, short-circuits on success
//! - [`Not`] - logical NOT, fails with statically-fixed inverse text
//! - [`WithMessage`] - replaces every failure message with a custom one
//! - [`Prefixed`] - literally prepends a prefix to every failure message
//! - [`Optional`] - lifts a validator over `Option`, `None` passes
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let username = empty()
//!     .not()
//!     .and(count(3..=20))
//!     .and(alphanumeric())
//!     .prefixed("username: ");
//!
//! assert!(username.validate("alice42").is_ok());
//! assert!(username.validate("no spaces here").is_err());
//! ```

pub mod and;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;
pub mod prefix;

pub use and::{And, AndAll, and, and_all};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, OrAny, or, or_any};
pub use prefix::{Prefixed, prefixed};
