use log::{debug, trace};

use crate::Options;
use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{Table, extract_html_block, parse_table},
    types::{BlockKind, BlockNode},
};

/// Phase 2 of block parsing: groups classified lines into [`BlockNode`]s.
///
/// Multi-line blocks (lists, tables, raw HTML) are collected as whole runs by
/// looking ahead from their first line, so no "block currently open" state
/// survives between iterations and nothing is ever re-read.
pub struct BlockScanner {
    options: Options,
    out: Vec<BlockNode>,
}

impl BlockScanner {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            out: vec![],
        }
    }

    /// Scans every line in document order. First matching rule wins per line:
    /// blank, heading, bullet, raw HTML opener, table row, paragraph.
    pub fn scan(mut self, lines: &[LineClass]) -> Vec<BlockNode> {
        let mut i = 0;
        while i < lines.len() {
            i = self.step(lines, i);
        }
        self.out
    }

    fn step(&mut self, lines: &[LineClass], i: usize) -> usize {
        let lc = &lines[i];

        if lc.is_blank {
            return i + 1;
        }

        if let Some(h) = lc.heading {
            self.out.push(BlockNode {
                kind: BlockKind::Heading {
                    level: h.level,
                    content: h.content,
                },
                span: lc.line,
            });
            return i + 1;
        }

        if lc.bullet.is_some() {
            return self.list_run(lines, i);
        }

        if self.options.raw_html && lc.opens_html {
            let (node, next) = extract_html_block(lines, i);
            trace!("raw html block over lines {i}..{next}");
            self.out.push(node);
            return next;
        }

        if self.claims_table_row(lc) {
            return self.table_run(lines, i);
        }

        self.push_paragraph(lc);
        i + 1
    }

    fn list_run(&mut self, lines: &[LineClass], start: usize) -> usize {
        let end = run_end(lines, start, |lc| lc.bullet.is_some());
        let run = &lines[start..end];

        self.out.push(BlockNode {
            kind: BlockKind::List {
                items: run.iter().filter_map(|lc| lc.bullet).collect(),
            },
            span: run_span(run),
        });
        end
    }

    fn table_run(&mut self, lines: &[LineClass], start: usize) -> usize {
        let end = run_end(lines, start, |lc| self.claims_table_row(lc));
        let run = &lines[start..end];

        let content_rows = run
            .iter()
            .filter(|lc| !Table::is_divider(&lc.trimmed_text))
            .count();

        if content_rows < 2 {
            // A lone pipe-containing line is prose, not an empty table.
            debug!(
                "table run over lines {start}..{end} has {content_rows} content row(s), rendering as paragraphs"
            );
            for lc in run {
                self.push_paragraph(lc);
            }
        } else {
            self.out.push(BlockNode {
                kind: BlockKind::Table(parse_table(run)),
                span: run_span(run),
            });
        }
        end
    }

    /// A line is a table row only if no earlier rule would claim it.
    fn claims_table_row(&self, lc: &LineClass) -> bool {
        self.options.tables
            && lc.table_row
            && lc.heading.is_none()
            && lc.bullet.is_none()
            && !(self.options.raw_html && lc.opens_html)
    }

    fn push_paragraph(&mut self, lc: &LineClass) {
        self.out.push(BlockNode {
            kind: BlockKind::Paragraph {
                content: lc.trimmed,
            },
            span: lc.line,
        });
    }
}

fn run_end(lines: &[LineClass], start: usize, pred: impl Fn(&LineClass) -> bool) -> usize {
    let mut end = start;
    while end < lines.len() && pred(&lines[end]) {
        end += 1;
    }
    end
}

fn run_span(run: &[LineClass]) -> Span {
    match (run.first(), run.last()) {
        (Some(first), Some(last)) => Span::new(first.line.start, last.line.end),
        _ => Span::default(),
    }
}
