use crate::parsing::rope::span::Span;

/// A cursor for byte-by-byte inline parsing over a bounded range of a line.
///
/// Positions are absolute offsets into the full line `s`, so spans produced
/// while parsing a nested range (a link label, strong content) still index
/// the original line.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The full line being parsed.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
    /// Exclusive upper bound of the range being parsed.
    pub end: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the whole of `s`.
    pub fn new(s: &'a str) -> Self {
        Self::over(s, Span::new(0, s.len()))
    }

    /// Creates a cursor restricted to `range` of `s`.
    pub fn over(s: &'a str, range: Span) -> Self {
        Self {
            s,
            i: range.start,
            end: range.end.min(s.len()),
        }
    }

    /// Returns the current position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of the range.
    pub fn eof(&self) -> bool {
        self.i >= self.end
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    /// Peeks at the byte at absolute position `at`, if inside the range.
    pub fn byte_at(&self, at: usize) -> Option<u8> {
        if at < self.end {
            self.s.as_bytes().get(at).copied()
        } else {
            None
        }
    }

    /// Checks if the range starting at `at` begins with the given byte pattern.
    pub fn starts_with_at(&self, at: usize, pat: &[u8]) -> bool {
        at <= self.end && self.s.as_bytes()[at..self.end].starts_with(pat)
    }

    /// The char immediately before absolute position `at` in the full line.
    pub fn char_before(&self, at: usize) -> Option<char> {
        self.s.get(..at)?.chars().next_back()
    }

    /// The char starting at absolute position `at` in the full line.
    pub fn char_at(&self, at: usize) -> Option<char> {
        self.s.get(at..)?.chars().next()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves the cursor to absolute position `to`.
    pub fn jump_to(&mut self, to: usize) {
        self.i = to.min(self.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn range_limits_lookahead() {
        let cur = Cursor::over("**a** tail", Span::new(2, 3));
        assert_eq!(cur.peek(), Some(b'a'));
        assert!(!cur.starts_with_at(2, b"a*"));
        assert_eq!(cur.byte_at(3), None);
    }

    #[test]
    fn starts_with_at_within_range() {
        let cur = Cursor::new("[label](href)");
        assert!(cur.starts_with_at(6, b"]("));
        assert!(!cur.starts_with_at(7, b"]("));
        assert!(cur.starts_with_at(13, b""));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(cur.starts_with_at(0, b""));
    }

    #[test]
    fn neighbouring_chars_are_utf8_aware() {
        let cur = Cursor::new("é_x");
        assert_eq!(cur.char_before(2), Some('é'));
        assert_eq!(cur.char_at(2), Some('_'));
        assert_eq!(cur.char_before(0), None);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn jump_to_clamps_to_range_end() {
        let mut cur = Cursor::new("abc");
        cur.jump_to(10);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 3);
    }
}
