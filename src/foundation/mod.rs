//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//! - **Sequences**: [`Countable`], [`ElementNoun`]
//!
//! # Architecture
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```rust,ignore
//! use validus::foundation::{Validate, ValidationError};
//! use std::borrow::Cow;
//!
//! struct IsLowercase;
//!
//! impl Validate for IsLowercase {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.chars().all(char::is_lowercase) {
//!             Ok(())
//!         } else {
//!             Err(ValidationError::new(self.failure_text()))
//!         }
//!     }
//!
//!     fn failure_text(&self) -> Cow<'static, str> {
//!         Cow::Borrowed("lowercase")
//!     }
//! }
//! ```
//!
//! Validators compose using logical combinators:
//!
//! ```rust,ignore
//! let validator = empty().not().and(count(3..=20));
//! ```

pub mod error;
pub mod sequence;
pub mod traits;

pub use error::ValidationError;
pub use sequence::{Countable, ElementNoun};
pub use traits::{Validate, ValidateExt};
