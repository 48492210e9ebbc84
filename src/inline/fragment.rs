//! Alternating literal/value sequences.

/// One piece of resolved inline content.
///
/// Sequences never hold two adjacent `Text` fragments or an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<R> {
    /// Literal text between entities.
    Text(String),
    /// A resolved entity, as returned by the handler.
    Value(R),
}

impl<R> Fragment<R> {
    /// The literal text, if this is a text fragment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Value(_) => None,
        }
    }
}

/// Append literal text, merging with a trailing text fragment.
pub fn push_text<R>(fragments: &mut Vec<Fragment<R>>, text: &str) {
    if text.is_empty() {
        return;
    }
    match fragments.last_mut() {
        Some(Fragment::Text(prev)) => prev.push_str(text),
        _ => fragments.push(Fragment::Text(text.to_string())),
    }
}
