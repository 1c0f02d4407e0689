use crate::parsing::rope::span::Span;

/// A parsed inline node. Spans index the line the node was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text, escaped on output.
    Text(Span),
    /// `![alt](src)`.
    Image { full: Span, alt: Span, src: Span },
    /// `**children**`.
    Strong { full: Span, children: Vec<InlineNode> },
    /// `*children*` or `_children_`.
    Emphasis { full: Span, children: Vec<InlineNode> },
    /// A backtick code span. This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between backticks.
        inner: Span,
    },
    /// `[label](href)`; the label is itself inline-parsed.
    Link {
        full: Span,
        label: Vec<InlineNode>,
        href: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Image { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::CodeSpan { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}
