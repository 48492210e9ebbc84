//! Dispatch driver: walks normalized blocks and invokes the handler.

use smallvec::SmallVec;

use crate::block::{Block, BlockKind};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::{ParseError, Result};
use crate::handler::Handler;
use crate::inline::{Delimiters, EntityParser, Fragment};
use crate::limits::INLINE_BEGIN_STACK;

/// One block after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<R> {
    pub kind: BlockKind,
    /// Command/begin/end name.
    pub name: Option<String>,
    /// 1-based source line the block starts on.
    pub line: usize,
    /// What the handler returned for this block.
    pub value: R,
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<R> {
    pub blocks: Vec<Resolved<R>>,
    /// Recoverable problems, in source order of detection.
    pub diagnostics: Vec<Diagnostic>,
}

impl<R> Document<R> {
    /// Handler values in document order.
    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.blocks.iter().map(|b| &b.value)
    }

    /// Whether any recoverable problem was reported.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Per-call dispatch state. The begin stack never outlives one call.
pub(crate) struct Dispatcher<'a, H> {
    entities: EntityParser<'a>,
    handler: &'a mut H,
    strict: bool,
    /// Open begin blocks with their lines.
    stack: SmallVec<[(String, usize); INLINE_BEGIN_STACK]>,
}

impl<'a, H: Handler> Dispatcher<'a, H> {
    pub(crate) fn new(delimiters: &'a Delimiters, handler: &'a mut H, strict: bool) -> Self {
        Self {
            entities: EntityParser::new(delimiters),
            handler,
            strict,
            stack: SmallVec::new(),
        }
    }

    /// Dispatch every block in order.
    pub(crate) fn run(
        mut self,
        blocks: Vec<Block>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<Resolved<H::Output>>> {
        let mut resolved = Vec::with_capacity(blocks.len());

        for block in blocks {
            let value = self.dispatch(&block, diagnostics)?;
            resolved.push(Resolved {
                kind: block.kind,
                name: block.name,
                line: block.line,
                value,
            });
        }

        for (name, line) in self.stack.drain(..) {
            diagnostics.push(Diagnostic::report(line, DiagnosticKind::UnclosedBlock { name }));
        }

        Ok(resolved)
    }

    fn dispatch(&mut self, block: &Block, diagnostics: &mut Vec<Diagnostic>) -> Result<H::Output> {
        let name = block.name_str();

        let value = match block.kind {
            BlockKind::Paragraph => {
                let content = self.resolve(block)?;
                self.handler.on_paragraph(content)
            }
            BlockKind::Command => {
                let content = self.resolve(block)?;
                self.handler.on_command(name, content)
            }
            BlockKind::Begin => {
                let content = self.resolve(block)?;
                self.stack.push((name.to_string(), block.line));
                self.handler.on_begin(name, content)
            }
            BlockKind::End => {
                self.close(name, block.line, diagnostics)?;
                self.handler.on_end(name)
            }
            BlockKind::Verbatim => self.handler.on_verbatim(block.content_str()),
        };

        Ok(value)
    }

    /// Resolve the entities of a textual block.
    fn resolve(&mut self, block: &Block) -> Result<Vec<Fragment<H::Output>>> {
        self.entities
            .parse(block.content_str(), &mut *self.handler)
            .map_err(|source| ParseError::entity(block.line, source))
    }

    /// Pop the begin stack for an end marker.
    fn close(&mut self, name: &str, line: usize, diagnostics: &mut Vec<Diagnostic>) -> Result<()> {
        let expected = self.stack.pop().map(|(open, _)| open);
        if expected.as_deref() == Some(name) {
            return Ok(());
        }

        if self.strict {
            return Err(ParseError::UnbalancedBlock {
                line,
                expected,
                found: name.to_string(),
            });
        }

        diagnostics.push(Diagnostic::report(
            line,
            DiagnosticKind::UnbalancedBlock {
                expected,
                found: name.to_string(),
            },
        ));
        Ok(())
    }
}
