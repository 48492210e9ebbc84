//! Structural dump of a parsed document.
//!
//! [`Outline`] keeps entities visible as `T{body}` so a dump shows exactly
//! how the scanner nested them. [`render`] prints one line per block:
//!
//! ```text
//! command head1: "Title with B{bold}"
//! paragraph: "Some text."
//! end list
//! warning: line 9: `list` is never closed
//! ```

use std::fmt::Write;

use crate::block::BlockKind;
use crate::dispatch::Document;
use crate::handler::{Compose, Handler};
use crate::inline::Fragment;

/// Handler rendering entities as `T{body}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Outline;

impl Handler for Outline {
    type Output = String;

    fn on_entity(&mut self, tag: char, content: Vec<Fragment<String>>) -> String {
        format!("{tag}{{{}}}", String::compose(content))
    }
}

/// Render a document, one line per block followed by its diagnostics.
pub fn render(doc: &Document<String>) -> String {
    let mut out = String::new();

    for block in &doc.blocks {
        let label = block.kind.label();
        let _ = match (block.kind, block.name.as_deref()) {
            (BlockKind::End, Some(name)) => writeln!(out, "{label} {name}"),
            (_, Some(name)) => writeln!(out, "{label} {name}: {:?}", block.value),
            (_, None) => writeln!(out, "{label}: {:?}", block.value),
        };
    }

    for diagnostic in &doc.diagnostics {
        let _ = writeln!(out, "warning: {diagnostic}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn test_render() {
        let doc = Parser::new()
            .parse("=head1 Title B<x>\n\n+list\n\n  code\n   more", &mut Outline)
            .unwrap();
        assert_eq!(
            render(&doc),
            "command head1: \"Title B{x}\"\n\
             begin list: \"\"\n\
             verbatim: \"code\\n more\"\n\
             warning: line 3: `list` is never closed\n"
        );
    }
}
