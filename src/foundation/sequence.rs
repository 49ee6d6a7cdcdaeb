//! Sequence-like input support
//!
//! The emptiness and count validators apply to any "sequence-like" input:
//! something with a length and an element noun for error messages. Strings
//! count Unicode scalar values and describe their elements as characters;
//! slices and vectors count elements and describe them as items.

/// The noun used when rendering counts in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementNoun {
    /// String elements: `1 character` / `3 characters`.
    Character,
    /// Collection elements: `1 item` / `3 items`.
    Item,
}

impl ElementNoun {
    /// Renders a count with the noun, singular for exactly 1.
    #[must_use]
    pub fn counted(self, count: usize) -> String {
        match (self, count) {
            (Self::Character, 1) => "1 character".to_string(),
            (Self::Character, n) => format!("{n} characters"),
            (Self::Item, 1) => "1 item".to_string(),
            (Self::Item, n) => format!("{n} items"),
        }
    }
}

/// A value with a countable number of elements.
///
/// Implemented for `str`, `String`, `[T]` and `Vec<T>`. The element noun is
/// part of the type, not the value: error messages for strings always speak
/// of characters, collections of items.
pub trait Countable {
    /// The noun describing one element of this sequence.
    const NOUN: ElementNoun;

    /// The number of elements.
    fn count(&self) -> usize;
}

impl Countable for str {
    const NOUN: ElementNoun = ElementNoun::Character;

    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Countable for String {
    const NOUN: ElementNoun = ElementNoun::Character;

    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl<T> Countable for [T] {
    const NOUN: ElementNoun = ElementNoun::Item;

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for Vec<T> {
    const NOUN: ElementNoun = ElementNoun::Item;

    fn count(&self) -> usize {
        self.len()
    }
}
