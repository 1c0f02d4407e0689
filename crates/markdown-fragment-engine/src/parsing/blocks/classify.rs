use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{Heading, HeadingSig, HtmlBlock, ListItem, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding lines or to the enabled [`Options`].
///
/// [`Options`]: crate::Options
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, terminator included.
    pub line: Span,
    /// The line without its `\n` / `\r\n` terminator. Raw HTML keeps this verbatim.
    pub text: Span,
    /// The line with surrounding whitespace removed.
    pub trimmed: Span,
    /// Text of `trimmed`, kept for the table cell splitter.
    pub trimmed_text: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Heading marker and content, if the line is an ATX heading.
    pub heading: Option<HeadingSig>,
    /// Item content, if the line is a bullet.
    pub bullet: Option<Span>,
    /// Whether the line opens a raw HTML element.
    pub opens_html: bool,
    /// Whether the line could be a table row.
    pub table_row: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    ///
    /// All spans in the result are absolute offsets into the rope.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let body = lr.text.trim_end_matches(['\r', '\n']);
        let trimmed = body.trim();
        let lead = body.len() - body.trim_start().len();
        let base = lr.span.start + lead;
        let is_blank = trimmed.is_empty();

        LineClass {
            line: lr.span,
            text: Span::new(lr.span.start, lr.span.start + body.len()),
            trimmed: Span::new(base, base + trimmed.len()),
            trimmed_text: trimmed.to_string(),
            is_blank,
            heading: Heading::sig(trimmed).map(|h| HeadingSig {
                content: h.content.shifted(base),
                ..h
            }),
            bullet: ListItem::sig(trimmed).map(|sp| sp.shifted(base)),
            opens_html: HtmlBlock::opens(trimmed),
            table_row: !is_blank && Table::is_row(trimmed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::lines_with_spans;
    use xi_rope::Rope;

    fn classify_all(src: &str) -> Vec<LineClass> {
        let rope = Rope::from(src);
        lines_with_spans(&rope)
            .map(|lr| MarkdownLineClassifier.classify(&lr))
            .collect()
    }

    #[test]
    fn strips_crlf_terminator() {
        let lines = classify_all("hello\r\nworld\r\n");
        assert_eq!(lines[0].text, Span::new(0, 5));
        assert_eq!(lines[0].line, Span::new(0, 7));
        assert_eq!(lines[1].trimmed_text, "world");
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        let lines = classify_all("   \t\n");
        assert!(lines[0].is_blank);
        assert!(!lines[0].table_row);
    }

    #[test]
    fn spans_are_absolute() {
        let src = "intro\n  ## Indented heading  \n";
        let lines = classify_all(src);
        let heading = lines[1].heading.expect("heading");
        assert_eq!(heading.level, 2);
        assert_eq!(heading.content.of(src), "Indented heading");
        assert_eq!(lines[1].trimmed.of(src), "## Indented heading");
    }

    #[test]
    fn bullet_content_span() {
        let src = "- first item\n";
        let lines = classify_all(src);
        assert_eq!(lines[0].bullet.map(|sp| sp.of(src)), Some("first item"));
    }

    #[test]
    fn records_html_and_table_facts() {
        let lines = classify_all("<div class=\"x\">\na | b\n");
        assert!(lines[0].opens_html);
        assert!(!lines[0].table_row);
        assert!(lines[1].table_row);
    }
}
