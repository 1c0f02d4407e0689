use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{blocks::classify::LineClass, rope::span::Span};

/// A parsed pipe table. Cells are spans into the rope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// Header cells, present only when the second line is a divider row.
    pub header: Option<Vec<Span>>,
    /// Body rows in document order.
    pub rows: Vec<Vec<Span>>,
}

/// Pipe table block type with owned delimiter constants.
pub struct Table;

impl Table {
    /// Cell separator.
    pub const DELIMITER: char = '|';

    /// Whether a trimmed, non-blank line can take part in a table.
    ///
    /// Outer pipes are optional, so any line containing the delimiter qualifies.
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.contains(Self::DELIMITER)
    }

    /// Whether every cell of the line is a `:?-{3,}:?` alignment marker.
    pub fn is_divider(trimmed: &str) -> bool {
        static DIVIDER_CELL: OnceLock<Regex> = OnceLock::new();
        let cell = DIVIDER_CELL
            .get_or_init(|| Regex::new(r"^:?-{3,}:?$").expect("Invalid divider regex"));

        let cells = Self::split_cells(trimmed);
        !cells.is_empty() && cells.iter().all(|c| cell.is_match(c.of(trimmed)))
    }

    /// Splits a trimmed row on `|` into whitespace-trimmed cell spans.
    ///
    /// One leading and one trailing empty cell produced by outer pipes are dropped.
    /// Returned spans are relative to `trimmed`.
    pub fn split_cells(trimmed: &str) -> Vec<Span> {
        let mut cells = Vec::new();
        let mut start = 0;
        for (i, _) in trimmed.match_indices(Self::DELIMITER) {
            cells.push(Span::new(start, i));
            start = i + Self::DELIMITER.len_utf8();
        }
        cells.push(Span::new(start, trimmed.len()));

        if trimmed.starts_with(Self::DELIMITER) {
            cells.remove(0);
        }
        if trimmed.ends_with(Self::DELIMITER) {
            cells.pop();
        }

        cells.into_iter().map(|c| trim_span(trimmed, c)).collect()
    }
}

/// Builds a [`TableBlock`] from a contiguous run of table rows.
///
/// If the line at index 1 is a divider, line 0 becomes the header and the
/// divider is dropped. Every other line is a body row, in order.
pub fn parse_table(lines: &[LineClass]) -> TableBlock {
    let row = |lc: &LineClass| -> Vec<Span> {
        Table::split_cells(&lc.trimmed_text)
            .into_iter()
            .map(|c| c.shifted(lc.trimmed.start))
            .collect()
    };

    let has_header = lines.len() >= 2 && Table::is_divider(&lines[1].trimmed_text);
    if has_header {
        TableBlock {
            header: Some(row(&lines[0])),
            rows: lines[2..].iter().map(row).collect(),
        }
    } else {
        TableBlock {
            header: None,
            rows: lines.iter().map(row).collect(),
        }
    }
}

fn trim_span(text: &str, sp: Span) -> Span {
    let cell = sp.of(text);
    let lead = cell.len() - cell.trim_start().len();
    let start = sp.start + lead;
    Span::new(start, start + cell.trim().len())
}
