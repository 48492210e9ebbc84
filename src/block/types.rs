//! Block-level types produced by the classifier.

/// What a block is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Plain text lines, entities resolved.
    Paragraph,
    /// `=name rest`
    Command,
    /// `+name rest`, opens a named region.
    Begin,
    /// `-name`, closes a named region.
    End,
    /// Indented lines, kept raw.
    Verbatim,
}

impl BlockKind {
    /// Kind introduced by a marker character, if `c` is one.
    #[inline]
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Command),
            '+' => Some(Self::Begin),
            '-' => Some(Self::End),
            _ => None,
        }
    }

    /// Whether blocks of this kind carry a name.
    #[inline]
    pub fn is_named(self) -> bool {
        matches!(self, Self::Command | Self::Begin | Self::End)
    }

    /// Lowercase label, used in outlines and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Command => "command",
            Self::Begin => "begin",
            Self::End => "end",
            Self::Verbatim => "verbatim",
        }
    }
}

/// One classified unit of document structure.
///
/// `name` is present iff the kind is named; `content` is absent only for
/// [`BlockKind::End`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub name: Option<String>,
    pub content: Option<String>,
    /// Leading whitespace stripped from every verbatim line (0 otherwise).
    pub indent: usize,
    /// 1-based source line the block starts on.
    pub line: usize,
    /// Unstripped verbatim lines, kept so merges can re-level them.
    pub(crate) raw: Vec<String>,
}

impl Block {
    /// A paragraph block.
    pub fn paragraph(content: impl Into<String>, line: usize) -> Self {
        Self::textual(BlockKind::Paragraph, None, content.into(), line)
    }

    /// A command or begin block.
    pub fn named(
        kind: BlockKind,
        name: impl Into<String>,
        content: impl Into<String>,
        line: usize,
    ) -> Self {
        debug_assert!(matches!(kind, BlockKind::Command | BlockKind::Begin));
        Self::textual(kind, Some(name.into()), content.into(), line)
    }

    /// An end block.
    pub fn end(name: impl Into<String>, line: usize) -> Self {
        Self {
            kind: BlockKind::End,
            name: Some(name.into()),
            content: None,
            indent: 0,
            line,
            raw: Vec::new(),
        }
    }

    /// A verbatim block from its raw lines, stripping their common indent.
    pub fn verbatim(raw: Vec<String>, line: usize) -> Self {
        let indent = super::verbatim::min_indent(&raw);
        let content = super::verbatim::strip_indent(&raw, indent);
        Self {
            kind: BlockKind::Verbatim,
            name: None,
            content: Some(content),
            indent,
            line,
            raw,
        }
    }

    fn textual(kind: BlockKind, name: Option<String>, content: String, line: usize) -> Self {
        Self {
            kind,
            name,
            content: Some(content),
            indent: 0,
            line,
            raw: Vec::new(),
        }
    }

    /// Name as a `&str`, empty for unnamed blocks.
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Content as a `&str`, empty for end blocks.
    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}
