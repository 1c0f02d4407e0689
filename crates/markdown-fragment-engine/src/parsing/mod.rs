pub mod blocks;
pub mod inline;
pub mod rope;

use log::{debug, trace};
use xi_rope::Rope;

use crate::Options;
use blocks::{BlockNode, BlockScanner, LineClass, MarkdownLineClassifier};
use rope::{lines_with_spans, preview};

/// The block structure of one source document.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Splits the rope into lines, classifies each, and groups them into blocks.
pub fn parse_document(rope: &Rope, options: Options) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let lines: Vec<LineClass> = lines_with_spans(rope)
        .map(|lr| classifier.classify(&lr))
        .collect();

    let blocks = BlockScanner::new(options).scan(&lines);
    debug!("parsed {} lines into {} blocks", lines.len(), blocks.len());
    for block in &blocks {
        trace!("block at {:?}: {:?}", block.span, preview(rope, block.span, 40));
    }

    ParsedDoc { blocks }
}
