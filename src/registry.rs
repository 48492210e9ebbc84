//! Table-driven handler.
//!
//! A [`Registry`] maps command names, begin/end names and entity letters to
//! closures. Anything unregistered falls back to the default [`Handler`]
//! behavior (concatenate text, identity for verbatim).
//!
//! # Example
//! ```
//! use tagdown::{Parser, Registry};
//!
//! let mut registry = Registry::new()
//!     .command("head1", |text| format!("# {text}"))
//!     .entity('B', |text| format!("**{text}**"));
//!
//! let doc = Parser::new().parse("=head1 A B<bold> title", &mut registry).unwrap();
//! assert_eq!(doc.blocks[0].value, "# A **bold** title");
//! ```

use rustc_hash::FxHashMap;

use crate::handler::{Compose, Handler};
use crate::inline::Fragment;

type TextFn = Box<dyn Fn(&str) -> String + Send + Sync>;
type EndFn = Box<dyn Fn() -> String + Send + Sync>;

/// Handler built from per-name callbacks.
#[derive(Default)]
pub struct Registry {
    paragraph: Option<TextFn>,
    verbatim: Option<TextFn>,
    commands: FxHashMap<String, TextFn>,
    begins: FxHashMap<String, TextFn>,
    ends: FxHashMap<String, EndFn>,
    entities: FxHashMap<char, TextFn>,
}

impl Registry {
    /// Empty registry: behaves like [`PlainText`](crate::PlainText).
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback for paragraphs, given their composed text.
    pub fn paragraph<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.paragraph = Some(Box::new(f));
        self
    }

    /// Callback for verbatim blocks, given their raw text.
    pub fn verbatim<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.verbatim = Some(Box::new(f));
        self
    }

    /// Callback for `=name` commands.
    pub fn command<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.commands.insert(name.into(), Box::new(f));
        self
    }

    /// Callback for `+name` begin markers.
    pub fn begin<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.begins.insert(name.into(), Box::new(f));
        self
    }

    /// Callback for `-name` end markers.
    pub fn end<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.ends.insert(name.into(), Box::new(f));
        self
    }

    /// Callback for entities with tag letter `tag`.
    ///
    /// Registering `Z` has no effect: the divider never reaches a handler.
    pub fn entity<F>(mut self, tag: char, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.entities.insert(tag, Box::new(f));
        self
    }

    /// Whether a command callback is registered for `name`.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Whether an entity callback is registered for `tag`.
    pub fn has_entity(&self, tag: char) -> bool {
        self.entities.contains_key(&tag)
    }
}

fn apply(f: Option<&TextFn>, content: Vec<Fragment<String>>) -> String {
    let text = String::compose(content);
    match f {
        Some(f) => f(&text),
        None => text,
    }
}

impl Handler for Registry {
    type Output = String;

    fn on_paragraph(&mut self, content: Vec<Fragment<String>>) -> String {
        apply(self.paragraph.as_ref(), content)
    }

    fn on_command(&mut self, name: &str, content: Vec<Fragment<String>>) -> String {
        apply(self.commands.get(name), content)
    }

    fn on_begin(&mut self, name: &str, content: Vec<Fragment<String>>) -> String {
        apply(self.begins.get(name), content)
    }

    fn on_end(&mut self, name: &str) -> String {
        self.ends.get(name).map(|f| f()).unwrap_or_default()
    }

    fn on_verbatim(&mut self, text: &str) -> String {
        match &self.verbatim {
            Some(f) => f(text),
            None => text.to_string(),
        }
    }

    fn on_entity(&mut self, tag: char, content: Vec<Fragment<String>>) -> String {
        apply(self.entities.get(&tag), content)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.commands.len())
            .field("begins", &self.begins.len())
            .field("ends", &self.ends.len())
            .field("entities", &self.entities.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    fn html() -> Registry {
        Registry::new()
            .paragraph(|text| format!("<p>{text}</p>"))
            .verbatim(|text| format!("<pre>{text}</pre>"))
            .command("head1", |text| format!("<h1>{text}</h1>"))
            .begin("list", |_| "<ul>".to_string())
            .end("list", || "</ul>".to_string())
            .entity('B', |text| format!("<b>{text}</b>"))
            .entity('I', |text| format!("<i>{text}</i>"))
    }

    #[test]
    fn test_registered_callbacks() {
        let input =
            "=head1 B<Big> news\n\n+list\n\nSome I<B<nested>> text\n\n  a <raw> line\n\n-list";
        let doc = Parser::new().parse(input, &mut html()).unwrap();
        let values: Vec<&str> = doc.values().map(String::as_str).collect();
        assert_eq!(
            values,
            [
                "<h1><b>Big</b> news</h1>",
                "<ul>",
                "<p>Some <i><b>nested</b></i> text</p>",
                "<pre>a <raw> line</pre>",
                "</ul>",
            ]
        );
    }

    #[test]
    fn test_unregistered_fall_back() {
        let mut registry = Registry::new().entity('B', |t| t.to_uppercase());
        let doc = Parser::new()
            .parse("=over 4\n\nB<x> C<y>\n\n-over", &mut registry)
            .unwrap();
        let values: Vec<&str> = doc.values().map(String::as_str).collect();
        assert_eq!(values, ["4", "X y", ""]);
    }

    #[test]
    fn test_lookup() {
        let registry = html();
        assert!(registry.has_command("head1"));
        assert!(!registry.has_command("head2"));
        assert!(registry.has_entity('B'));
        assert!(!registry.has_entity('Z'));
    }
}
