//! Character-set membership validators

use std::borrow::Cow;
use std::ops::BitOr;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// CHARACTER SET
// ============================================================================

// Class bits, ordered as the traits render.
const NEWLINES: u8 = 1;
const WHITESPACE: u8 = 1 << 1;
const UPPERCASE: u8 = 1 << 2;
const LOWERCASE: u8 = 1 << 3;
const DIGITS: u8 = 1 << 4;
const ASCII: u8 = 1 << 5;

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// An immutable set of allowed characters, built from named classes and
/// ad-hoc characters, composable with `|`.
///
/// # Examples
///
/// ```rust
/// use validus::validators::CharacterSet;
///
/// let set = CharacterSet::alphanumerics() | CharacterSet::whitespace();
/// assert!(set.contains('a'));
/// assert!(set.contains(' '));
/// assert!(!set.contains('_'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterSet {
    classes: u8,
    extras: Vec<char>,
}

impl CharacterSet {
    fn from_classes(classes: u8) -> Self {
        Self {
            classes,
            extras: Vec::new(),
        }
    }

    /// Newline characters (LF, CR, vertical tab, form feed, NEL, line and
    /// paragraph separators).
    #[must_use]
    pub fn newlines() -> Self {
        Self::from_classes(NEWLINES)
    }

    /// Non-newline whitespace.
    #[must_use]
    pub fn whitespace() -> Self {
        Self::from_classes(WHITESPACE)
    }

    /// Uppercase letters `A-Z`.
    #[must_use]
    pub fn uppercase() -> Self {
        Self::from_classes(UPPERCASE)
    }

    /// Lowercase letters `a-z`.
    #[must_use]
    pub fn lowercase() -> Self {
        Self::from_classes(LOWERCASE)
    }

    /// Decimal digits `0-9`.
    #[must_use]
    pub fn digits() -> Self {
        Self::from_classes(DIGITS)
    }

    /// Letters and digits: `A-Z`, `a-z`, `0-9`.
    #[must_use]
    pub fn alphanumerics() -> Self {
        Self::from_classes(UPPERCASE | LOWERCASE | DIGITS)
    }

    /// All characters with code points 0–127.
    ///
    /// Deliberately contributes no names to the allowed-traits listing, so
    /// the ASCII validator reports a bare `invalid character` message.
    #[must_use]
    pub fn ascii() -> Self {
        Self::from_classes(ASCII)
    }

    /// An ad-hoc set of exactly the characters in `chars`.
    #[must_use]
    pub fn of(chars: &str) -> Self {
        let mut extras: Vec<char> = chars.chars().collect();
        extras.sort_unstable();
        extras.dedup();
        Self { classes: 0, extras }
    }

    /// The union of two sets.
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        self.classes |= other.classes;
        self.extras.extend(other.extras);
        self.extras.sort_unstable();
        self.extras.dedup();
        self
    }

    /// Whether `c` is a member of this set.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        let in_class = (self.classes & NEWLINES != 0 && is_newline(c))
            || (self.classes & WHITESPACE != 0 && c.is_whitespace() && !is_newline(c))
            || (self.classes & UPPERCASE != 0 && c.is_ascii_uppercase())
            || (self.classes & LOWERCASE != 0 && c.is_ascii_lowercase())
            || (self.classes & DIGITS != 0 && c.is_ascii_digit())
            || (self.classes & ASCII != 0 && c.is_ascii());
        in_class || self.extras.binary_search(&c).is_ok()
    }

    /// The names of the set's constituent classes, in fixed order:
    /// newlines, whitespace, `A-Z`, `a-z`, `0-9`.
    ///
    /// The order never depends on how the set was assembled; the ASCII
    /// class and ad-hoc characters contribute no names.
    #[must_use]
    pub fn traits(&self) -> Vec<&'static str> {
        const NAMED: [(u8, &str); 5] = [
            (NEWLINES, "newlines"),
            (WHITESPACE, "whitespace"),
            (UPPERCASE, "A-Z"),
            (LOWERCASE, "a-z"),
            (DIGITS, "0-9"),
        ];
        NAMED
            .iter()
            .filter(|(bit, _)| self.classes & bit != 0)
            .map(|(_, name)| *name)
            .collect()
    }

    /// The `(allowed: …)` message suffix, if the set has named traits.
    fn allowed_suffix(&self) -> Option<String> {
        let traits = self.traits();
        if traits.is_empty() {
            None
        } else {
            Some(format!("(allowed: {})", traits.join(", ")))
        }
    }
}

impl BitOr for CharacterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

// ============================================================================
// CHAR SET VALIDATOR
// ============================================================================

/// Validates that every character of a string belongs to an allowed set.
///
/// The failure message names the first offending character and, when the
/// set was built from named classes, lists the allowed traits:
///
/// ```rust
/// use validus::prelude::*;
///
/// let err = alphanumeric().validate("_").unwrap_err();
/// assert_eq!(
///     err.messages().next(),
///     Some("invalid character: '_' (allowed: A-Z, a-z, 0-9)"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    allowed: CharacterSet,
}

impl CharSet {
    /// Creates a validator over the given allowed set.
    #[must_use]
    pub fn new(allowed: CharacterSet) -> Self {
        Self { allowed }
    }

    /// The allowed set.
    pub fn allowed(&self) -> &CharacterSet {
        &self.allowed
    }
}

impl Validate for CharSet {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input.chars().find(|c| !self.allowed.contains(*c)) {
            None => Ok(()),
            Some(offending) => {
                let mut reason = format!("invalid character: '{offending}'");
                if let Some(suffix) = self.allowed.allowed_suffix() {
                    reason.push(' ');
                    reason.push_str(&suffix);
                }
                Err(ValidationError::new(reason))
            }
        }
    }

    fn failure_text(&self) -> Cow<'static, str> {
        match self.allowed.allowed_suffix() {
            Some(suffix) => Cow::Owned(format!("invalid character {suffix}")),
            None => Cow::Borrowed("invalid character"),
        }
    }
}

/// Creates a [`CharSet`] validator over the given allowed set.
///
/// ```rust
/// use validus::prelude::*;
/// use validus::validators::CharacterSet;
///
/// let validator = char_set(CharacterSet::alphanumerics() | CharacterSet::whitespace());
/// assert!(validator.validate("abc 123").is_ok());
/// ```
#[must_use]
pub fn char_set(allowed: CharacterSet) -> CharSet {
    CharSet::new(allowed)
}

/// Validates that all characters are ASCII (code points 0–127).
#[must_use]
pub fn ascii() -> CharSet {
    CharSet::new(CharacterSet::ascii())
}

/// Validates that all characters are in `A-Z`, `a-z` or `0-9`.
#[must_use]
pub fn alphanumeric() -> CharSet {
    CharSet::new(CharacterSet::alphanumerics())
}

// ============================================================================
// TESTS
// ============================================================================
