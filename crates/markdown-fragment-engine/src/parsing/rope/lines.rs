use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line of the source with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the line terminator if present).
    pub span: Span,
    /// The line text, terminator included.
    pub text: String,
}

/// Returns an iterator over the source lines with their byte spans.
///
/// Uses `lines_raw` to keep terminators so that spans tile the rope exactly.
/// Both `\n` and `\r\n` endings are handled; the classifier strips them.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("one\r\ntwo\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span::new(0, 5));
        assert_eq!(lines[1].span, Span::new(5, 9));
        assert_eq!(lines[2].span, Span::new(9, 14));
        assert_eq!(lines[2].text, "three");
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(lines_with_spans(&rope).count(), 0);
    }
}
