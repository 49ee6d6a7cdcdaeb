//! # validus
//!
//! A composable, type-safe value-validation engine: validators decide
//! pass/fail for a typed value and, on failure, carry one or more
//! human-readable error messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use validus::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let username = empty().not().and(count(3..=20)).and(alphanumeric());
//! assert!(username.validate("alice").is_ok());
//! assert!(username.validate("a!").is_err());
//! ```
//!
//! ## Built-in Validators
//!
//! - **Sequences**: [`Empty`](validators::Empty), [`Count`](validators::Count)
//! - **Comparable values**: [`InRange`](validators::InRange)
//! - **Membership**: [`OneOf`](validators::OneOf)
//! - **Strings**: [`CharSet`](validators::CharSet), [`Email`](validators::Email),
//!   [`Url`](validators::Url)
//! - **Options**: [`IsNone`](validators::IsNone)
//! - **Ad-hoc**: [`Predicate`](validators::Predicate), [`FromFn`](validators::FromFn)
//!
//! ## Combinators
//!
//! [`And`](combinators::And), [`Or`](combinators::Or), [`Not`](combinators::Not),
//! [`WithMessage`](combinators::WithMessage), [`Prefixed`](combinators::Prefixed)
//! and [`Optional`](combinators::Optional) build new validators out of
//! existing ones without losing per-branch error text.
//!
//! ## Error Model
//!
//! Every validator returns `Result<(), ValidationError>`. A
//! [`ValidationError`](foundation::ValidationError) is an ordered, non-empty
//! list of message strings; binary combinators always append left-operand
//! messages before right-operand messages.

pub mod bounds;
pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
