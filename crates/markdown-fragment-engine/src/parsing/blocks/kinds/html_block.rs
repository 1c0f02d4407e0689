use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::{
        classify::LineClass,
        types::{BlockKind, BlockNode},
    },
    rope::span::Span,
};

/// Raw HTML block type. Its lines are emitted verbatim, never escaped.
pub struct HtmlBlock;

impl HtmlBlock {
    /// Whether a trimmed line opens an HTML element: `<tagname` then whitespace or `>`.
    pub fn opens(trimmed: &str) -> bool {
        static OPEN_TAG: OnceLock<Regex> = OnceLock::new();
        OPEN_TAG
            .get_or_init(|| {
                Regex::new(r"^<[A-Za-z][A-Za-z0-9-]*(\s|>)").expect("Invalid open tag regex")
            })
            .is_match(trimmed)
    }
}

/// Consumes lines verbatim from `start` through the first blank line
/// (inclusive) or the end of input.
///
/// Returns the block and the index of the first unconsumed line.
pub fn extract_html_block(lines: &[LineClass], start: usize) -> (BlockNode, usize) {
    let mut end = start;
    while end < lines.len() {
        let blank = lines[end].is_blank;
        end += 1;
        if blank {
            break;
        }
    }

    let run = &lines[start..end];
    let node = BlockNode {
        kind: BlockKind::HtmlBlock {
            lines: run.iter().map(|lc| lc.text).collect(),
        },
        span: Span::new(run[0].line.start, run[run.len() - 1].line.end),
    };
    (node, end)
}
