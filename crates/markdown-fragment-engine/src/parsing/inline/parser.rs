use crate::Options;
use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link, Strong},
    types::InlineNode,
};

/// Inline constructs in precedence order: earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Construct {
    Image,
    Strong,
    Emphasis,
    CodeSpan,
    Link,
}

impl Construct {
    const ALL: [Construct; 5] = [
        Construct::Image,
        Construct::Strong,
        Construct::Emphasis,
        Construct::CodeSpan,
        Construct::Link,
    ];

    /// Whether a closer search for `searching` jumps over this construct.
    fn skipped_by(self, searching: Construct) -> bool {
        self != searching && (self < searching || self == Construct::CodeSpan)
    }
}

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// The line is scanned once, left to right. At each position the constructs
/// are tried in the order image > strong > emphasis > code > link and the
/// first that matches consumes its whole extent, so nodes never overlap.
///
/// While looking for the closing delimiter of a construct, the scanner jumps
/// over any complete construct of higher precedence, and always over code
/// spans. So `*a **b** c*` is emphasis containing strong, and the `**` inside
/// `` **a `x**` b** `` does not close the outer strong.
///
/// # Cost
/// Closer positions and construct extents are tabulated once per parsed
/// range (see [`RangeIndex`]), so a range is processed in linear time and a
/// line in time proportional to its length times its nesting depth.
///
/// # Returns
/// Nodes covering the entire input. Text between constructs, including any
/// unmatched delimiters, is emitted as `InlineNode::Text`.
pub fn parse_inline(s: &str, options: Options) -> Vec<InlineNode> {
    InlineParser { s, options }.parse(Span::new(0, s.len()))
}

/// "First position at or after `j`" tables for one parse range.
///
/// Filled right to left in a single pass: every entry at `j` depends only on
/// entries at `j + 1` or at the end of a construct starting at `j`, both of
/// which are already known. Positions at or past the range end read as `None`.
struct RangeIndex {
    start: usize,
    /// Raw `](` (image alt close).
    alt_close: Vec<Option<usize>>,
    /// Raw `)` (image and link close).
    paren: Vec<Option<usize>>,
    /// Raw backtick (code span close).
    tick: Vec<Option<usize>>,
    /// `**` outside images and code spans.
    strong_close: Vec<Option<usize>>,
    /// `*` outside images, strong and code spans.
    star_close: Vec<Option<usize>>,
    /// `_` outside images, strong and code spans, not followed by a word char.
    underscore_close: Vec<Option<usize>>,
    /// `](` outside every other construct.
    label_close: Vec<Option<usize>>,
    /// End of each construct starting at a position, indexed by `Construct`.
    extents: [Vec<Option<usize>>; 5],
}

impl RangeIndex {
    fn new(range: Span) -> Self {
        let slots = || vec![None; range.len()];
        Self {
            start: range.start,
            alt_close: slots(),
            paren: slots(),
            tick: slots(),
            strong_close: slots(),
            star_close: slots(),
            underscore_close: slots(),
            label_close: slots(),
            extents: [slots(), slots(), slots(), slots(), slots()],
        }
    }

    fn get(&self, table: &[Option<usize>], at: usize) -> Option<usize> {
        at.checked_sub(self.start)
            .and_then(|i| table.get(i).copied())
            .flatten()
    }

    fn slot(&self, at: usize) -> usize {
        at - self.start
    }

    fn extent(&self, at: usize, c: Construct) -> Option<usize> {
        self.get(&self.extents[c as usize], at)
    }
}

struct InlineParser<'a> {
    s: &'a str,
    options: Options,
}

impl InlineParser<'_> {
    fn parse(&self, range: Span) -> Vec<InlineNode> {
        let mut cur = Cursor::over(self.s, range);
        let ix = self.index(&cur);
        let mut out = vec![];
        let mut text_start = cur.pos();

        // Helper to flush accumulated text as a Text node
        fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
            if end > start {
                out.push(InlineNode::Text(Span { start, end }));
            }
        }

        while !cur.eof() {
            if let Some(node) = self.node_at(&cur, &ix, cur.pos()) {
                let full = node.full();
                flush_text(&mut out, text_start, full.start);
                text_start = full.end;
                cur.jump_to(full.end);
                out.push(node);
                continue;
            }
            cur.bump();
        }

        flush_text(&mut out, text_start, cur.pos());
        out
    }

    /// Builds the [`RangeIndex`] for the cursor's range.
    fn index(&self, cur: &Cursor<'_>) -> RangeIndex {
        let mut ix = RangeIndex::new(Span::new(cur.pos(), cur.end));

        for j in (cur.pos()..cur.end).rev() {
            let slot = ix.slot(j);
            let next = |table: &[Option<usize>], hit: bool| {
                if hit {
                    Some(j)
                } else {
                    ix.get(table, j + 1)
                }
            };
            let alt_close = next(&ix.alt_close, cur.starts_with_at(j, Image::ALT_CLOSE));
            let paren = next(&ix.paren, cur.byte_at(j) == Some(Image::CLOSE));
            let tick = next(&ix.tick, cur.byte_at(j) == Some(CodeSpan::TICK));
            ix.alt_close[slot] = alt_close;
            ix.paren[slot] = paren;
            ix.tick[slot] = tick;

            // Extents at j only read tables at positions after j.
            for c in Construct::ALL {
                let end = self.extent_at(cur, &ix, j, c);
                ix.extents[c as usize][slot] = end;
            }

            let any = |_: usize| true;
            let underscore_closes =
                |at: usize| !cur.char_at(at + 1).is_some_and(Emphasis::is_word_char);
            let closer = |table: &[Option<usize>],
                          pat: &[u8],
                          searching: Construct,
                          accept: &dyn Fn(usize) -> bool| {
                Self::closer_at(cur, &ix, table, j, pat, searching, accept)
            };

            let strong = closer(&ix.strong_close, Strong::DELIM, Construct::Strong, &any);
            let star = closer(&ix.star_close, &[Emphasis::STAR], Construct::Emphasis, &any);
            let underscore = closer(
                &ix.underscore_close,
                &[Emphasis::UNDERSCORE],
                Construct::Emphasis,
                &underscore_closes,
            );
            let label = closer(&ix.label_close, Link::LABEL_CLOSE, Construct::Link, &any);
            ix.strong_close[slot] = strong;
            ix.star_close[slot] = star;
            ix.underscore_close[slot] = underscore;
            ix.label_close[slot] = label;
        }
        ix
    }

    /// The first `pat` at or after `j` that `accept`s, is not inside a
    /// construct outranking `searching`, and is not inside a code span.
    /// `table` must already hold the answers for positions after `j`.
    fn closer_at(
        cur: &Cursor<'_>,
        ix: &RangeIndex,
        table: &[Option<usize>],
        j: usize,
        pat: &[u8],
        searching: Construct,
        accept: &dyn Fn(usize) -> bool,
    ) -> Option<usize> {
        for c in Construct::ALL {
            if c.skipped_by(searching)
                && let Some(end) = ix.extent(j, c)
            {
                return ix.get(table, end);
            }
        }
        if cur.starts_with_at(j, pat) && accept(j) {
            return Some(j);
        }
        ix.get(table, j + 1)
    }

    /// Builds the highest-precedence construct starting at `at`, children included.
    fn node_at(&self, cur: &Cursor<'_>, ix: &RangeIndex, at: usize) -> Option<InlineNode> {
        Construct::ALL.iter().find_map(|&c| match c {
            Construct::Image => {
                self.image_at(cur, ix, at)
                    .map(|(alt, src, end)| InlineNode::Image {
                        full: Span::new(at, end),
                        alt,
                        src,
                    })
            }
            Construct::Strong => {
                self.strong_at(cur, ix, at)
                    .map(|(inner, end)| InlineNode::Strong {
                        full: Span::new(at, end),
                        children: self.parse(inner),
                    })
            }
            Construct::Emphasis => {
                self.emphasis_at(cur, ix, at)
                    .map(|(inner, end)| InlineNode::Emphasis {
                        full: Span::new(at, end),
                        children: self.parse(inner),
                    })
            }
            Construct::CodeSpan => {
                self.code_span_at(cur, ix, at)
                    .map(|(inner, end)| InlineNode::CodeSpan {
                        full: Span::new(at, end),
                        inner,
                    })
            }
            Construct::Link => {
                self.link_at(cur, ix, at)
                    .map(|(label, href, end)| InlineNode::Link {
                        full: Span::new(at, end),
                        label: self.parse(label),
                        href,
                    })
            }
        })
    }

    /// End of construct `c` if one starts at `at`, without building children.
    fn extent_at(
        &self,
        cur: &Cursor<'_>,
        ix: &RangeIndex,
        at: usize,
        c: Construct,
    ) -> Option<usize> {
        match c {
            Construct::Image => self.image_at(cur, ix, at).map(|(_, _, end)| end),
            Construct::Strong => self.strong_at(cur, ix, at).map(|(_, end)| end),
            Construct::Emphasis => self.emphasis_at(cur, ix, at).map(|(_, end)| end),
            Construct::CodeSpan => self.code_span_at(cur, ix, at).map(|(_, end)| end),
            Construct::Link => self.link_at(cur, ix, at).map(|(_, _, end)| end),
        }
    }

    /// `![alt](src)` → (alt, src, end). Alt and src are raw, unparsed text.
    fn image_at(
        &self,
        cur: &Cursor<'_>,
        ix: &RangeIndex,
        at: usize,
    ) -> Option<(Span, Span, usize)> {
        if !self.options.images || !cur.starts_with_at(at, Image::OPEN) {
            return None;
        }
        let alt_start = at + Image::OPEN.len();
        let alt_end = ix.get(&ix.alt_close, alt_start)?;
        let src_start = alt_end + Image::ALT_CLOSE.len();
        let src_end = ix.get(&ix.paren, src_start)?;

        Some((
            Span::new(alt_start, alt_end),
            Span::new(src_start, src_end),
            src_end + 1,
        ))
    }

    /// `**inner**`, closing at the first `**` after at least one byte of content.
    fn strong_at(&self, cur: &Cursor<'_>, ix: &RangeIndex, at: usize) -> Option<(Span, usize)> {
        if !cur.starts_with_at(at, Strong::DELIM) {
            return None;
        }
        let inner_start = at + Strong::DELIM.len();
        let mut close = ix.get(&ix.strong_close, inner_start)?;
        if close == inner_start {
            close = ix.get(&ix.strong_close, inner_start + 1)?;
        }

        Some((Span::new(inner_start, close), close + Strong::DELIM.len()))
    }

    /// `*inner*` anywhere, or `_inner_` at word boundaries. Content is non-empty.
    ///
    /// An underscore followed by a word char never closes, so `_snake_case_ x`
    /// closes at the last underscore.
    fn emphasis_at(&self, cur: &Cursor<'_>, ix: &RangeIndex, at: usize) -> Option<(Span, usize)> {
        let delim = cur.byte_at(at)?;
        let closers = match delim {
            Emphasis::STAR => {
                if cur.byte_at(at + 1) == Some(Emphasis::STAR) {
                    return None;
                }
                &ix.star_close
            }
            Emphasis::UNDERSCORE => {
                if cur.char_before(at).is_some_and(Emphasis::is_word_char) {
                    return None;
                }
                &ix.underscore_close
            }
            _ => return None,
        };

        let inner_start = at + 1;
        let close = ix.get(closers, inner_start)?;
        if close == inner_start {
            return None;
        }

        Some((Span::new(inner_start, close), close + 1))
    }

    /// `` `inner` `` with non-empty content. No nesting: the next tick closes.
    fn code_span_at(&self, cur: &Cursor<'_>, ix: &RangeIndex, at: usize) -> Option<(Span, usize)> {
        if cur.byte_at(at)? != CodeSpan::TICK {
            return None;
        }
        let close = ix.get(&ix.tick, at + 1)?;
        if close == at + 1 {
            return None;
        }
        Some((Span::new(at + 1, close), close + 1))
    }

    /// `[label](href)` → (label, href, end). The label closes at the first `](`
    /// outside any image, strong, emphasis or code span.
    fn link_at(
        &self,
        cur: &Cursor<'_>,
        ix: &RangeIndex,
        at: usize,
    ) -> Option<(Span, Span, usize)> {
        if cur.byte_at(at)? != Link::OPEN {
            return None;
        }
        let label_start = at + 1;
        let label_end = ix.get(&ix.label_close, label_start)?;
        let href_start = label_end + Link::LABEL_CLOSE.len();
        let href_end = ix.get(&ix.paren, href_start)?;

        Some((
            Span::new(label_start, label_end),
            Span::new(href_start, href_end),
            href_end + 1,
        ))
    }
}
