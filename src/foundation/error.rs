//! Error type for validation failures
//!
//! A validation failure is an ordered, non-empty list of human-readable
//! message strings. Messages use `Cow<'static, str>` for zero-allocation in
//! the common case of static message templates, and a small-vector so that
//! the typical one- or two-message failure never touches the heap.

use std::borrow::Cow;

use smallvec::SmallVec;

/// Inline capacity covers the overwhelmingly common single-message failure
/// and the two-branch combinator case.
type MessageList = SmallVec<[Cow<'static, str>; 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A validation failure carrying one or more error messages.
///
/// Invariant: the message list is never empty. The only ways to build a
/// `ValidationError` start from at least one message, and every transform
/// (merging, rewriting, prefixing) preserves the message count.
///
/// Message order is append-only: when two failures are merged, the left
/// operand's messages precede the right operand's.
///
/// # Examples
///
/// ```rust
/// use validus::foundation::ValidationError;
///
/// let error = ValidationError::new("invalid email");
/// assert_eq!(error.messages().collect::<Vec<_>>(), vec!["invalid email"]);
///
/// let merged = ValidationError::new("empty").merge(ValidationError::new("invalid url"));
/// assert_eq!(merged.messages().collect::<Vec<_>>(), vec!["empty", "invalid url"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", joined(.messages))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Ordered failure messages, oldest (leftmost operand) first.
    messages: MessageList,
}

impl ValidationError {
    /// Creates a validation error with a single message.
    ///
    /// ```rust
    /// use validus::foundation::ValidationError;
    ///
    /// // Static strings — zero allocation:
    /// let error = ValidationError::new("empty");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let error = ValidationError::new(format!("count: at least {} characters", 3));
    /// ```
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        let mut messages = MessageList::new();
        messages.push(message.into());
        Self { messages }
    }

    /// Appends another message to this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Concatenates two failures, keeping `self`'s messages first.
    #[must_use = "merge returns the combined error"]
    pub fn merge(mut self, other: Self) -> Self {
        self.messages.extend(other.messages);
        self
    }

    /// Rewrites every message in place, preserving order and count.
    ///
    /// Used by the message-override and prefixing combinators.
    #[must_use = "map_messages returns the rewritten error"]
    pub fn map_messages(mut self, mut f: impl FnMut(&str) -> Cow<'static, str>) -> Self {
        for message in &mut self.messages {
            let replaced = f(message.as_ref());
            *message = replaced;
        }
        self
    }

    /// Iterates the failure messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(Cow::as_ref)
    }

    /// Returns the number of messages (always at least 1).
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Renders the messages as a JSON array of strings.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.messages
                .iter()
                .map(|m| serde_json::Value::String(m.to_string()))
                .collect(),
        )
    }
}

fn joined(messages: &MessageList) -> String {
    messages.join("; ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_message() {
        let error = ValidationError::new("empty");
        assert_eq!(error.message_count(), 1);
        assert_eq!(error.messages().next(), Some("empty"));
    }

    #[test]
    fn merge_keeps_left_messages_first() {
        let left = ValidationError::new("a").with_message("b");
        let right = ValidationError::new("c");
        let merged = left.merge(right);
        assert_eq!(merged.messages().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn map_messages_preserves_count() {
        let error = ValidationError::new("a").with_message("b");
        let rewritten = error.map_messages(|_| Cow::Borrowed("Required"));
        assert_eq!(
            rewritten.messages().collect::<Vec<_>>(),
            vec!["Required", "Required"]
        );
    }

    #[test]
    fn display_joins_messages() {
        let error = ValidationError::new("empty").with_message("invalid email");
        assert_eq!(error.to_string(), "empty; invalid email");
    }

    #[test]
    fn zero_alloc_static_messages() {
        let error = ValidationError::new("empty");
        assert!(matches!(error.messages[0], Cow::Borrowed(_)));
    }
}
