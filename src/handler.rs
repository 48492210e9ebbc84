//! Caller-supplied block and entity handlers.
//!
//! The parser has no opinion on what `=head1` or `B<...>` mean. A
//! [`Handler`] receives every block and every entity and returns an opaque
//! value; entity values are spliced into the content handed to the
//! enclosing block's callback.

use crate::inline::Fragment;

/// Values a handler can build from text and from alternating sequences.
///
/// The default [`Handler`] methods rely on this to concatenate content.
pub trait Compose: Default + Sized {
    /// Wrap literal text (verbatim content).
    fn from_text(text: String) -> Self;

    /// Combine an alternating text/value sequence into one value.
    fn compose(parts: Vec<Fragment<Self>>) -> Self;
}

impl Compose for String {
    fn from_text(text: String) -> Self {
        text
    }

    fn compose(parts: Vec<Fragment<Self>>) -> Self {
        let mut out = String::new();
        for part in parts {
            match part {
                Fragment::Text(text) | Fragment::Value(text) => out.push_str(&text),
            }
        }
        out
    }
}

impl Compose for () {
    fn from_text(_text: String) -> Self {}

    fn compose(_parts: Vec<Fragment<Self>>) -> Self {}
}

/// Callbacks invoked by the dispatch driver.
///
/// Every method has a default: textual callbacks concatenate their content
/// (dropping entity formatting, keeping entity content), `on_end` returns
/// `Output::default()` and `on_verbatim` returns the text unchanged.
/// `on_entity` is never called for the zero-width divider `Z`.
pub trait Handler {
    type Output: Compose;

    fn on_paragraph(&mut self, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        Self::Output::compose(content)
    }

    fn on_command(&mut self, name: &str, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        let _ = name;
        Self::Output::compose(content)
    }

    fn on_begin(&mut self, name: &str, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        let _ = name;
        Self::Output::compose(content)
    }

    fn on_end(&mut self, name: &str) -> Self::Output {
        let _ = name;
        Self::Output::default()
    }

    fn on_verbatim(&mut self, text: &str) -> Self::Output {
        Self::Output::from_text(text.to_string())
    }

    fn on_entity(&mut self, tag: char, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        let _ = tag;
        Self::Output::compose(content)
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    type Output = H::Output;

    fn on_paragraph(&mut self, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        (**self).on_paragraph(content)
    }

    fn on_command(&mut self, name: &str, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        (**self).on_command(name, content)
    }

    fn on_begin(&mut self, name: &str, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        (**self).on_begin(name, content)
    }

    fn on_end(&mut self, name: &str) -> Self::Output {
        (**self).on_end(name)
    }

    fn on_verbatim(&mut self, text: &str) -> Self::Output {
        (**self).on_verbatim(text)
    }

    fn on_entity(&mut self, tag: char, content: Vec<Fragment<Self::Output>>) -> Self::Output {
        (**self).on_entity(tag, content)
    }
}

/// Handler with all default behavior: entities reduce to their text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Handler for PlainText {
    type Output = String;
}
