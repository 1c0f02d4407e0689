use crate::parsing::rope::span::Span;

use super::kinds::TableBlock;

/// The kind of a block, with spans into the rope for its raw inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading; `level` is already clamped to 1..=6.
    Heading { level: u8, content: Span },
    /// One or more directly adjacent bullet lines collapsed into a single list.
    List { items: Vec<Span> },
    /// A pipe table.
    Table(TableBlock),
    /// Trusted HTML lines emitted verbatim (terminators stripped).
    HtmlBlock { lines: Vec<Span> },
    /// A single line of prose.
    Paragraph { content: Span },
}

/// A parsed block node with its kind and the full span of source it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Byte span of every physical line the block consumed.
    pub span: Span,
}
