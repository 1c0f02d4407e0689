use crate::parsing::rope::span::Span;

/// Heading signature found on a line: level and content span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSig {
    /// Heading level, already clamped to `1..=Heading::MAX_LEVEL`.
    pub level: u8,
    /// Content after the marker run, trimmed, relative to the input string.
    pub content: Span,
}

/// ATX heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level HTML supports; longer marker runs clamp to it.
    pub const MAX_LEVEL: u8 = 6;

    /// Detects `#...# text` on an already trimmed line.
    ///
    /// The marker run must be followed by whitespace and non-empty content.
    pub fn sig(trimmed: &str) -> Option<HeadingSig> {
        let hashes = trimmed.len() - trimmed.trim_start_matches(Self::MARKER).len();
        if hashes == 0 {
            return None;
        }

        let rest = &trimmed[hashes..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let content = rest.trim();
        if content.is_empty() {
            return None;
        }
        let start = hashes + (rest.len() - rest.trim_start().len());

        Some(HeadingSig {
            level: hashes.min(usize::from(Self::MAX_LEVEL)) as u8,
            content: Span::new(start, start + content.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1)]
    #[case("### Title", 3)]
    #[case("###### Title", 6)]
    #[case("######## Title", 6)]
    #[case("#\tTabbed", 1)]
    fn detects_level(#[case] line: &str, #[case] level: u8) {
        assert_eq!(Heading::sig(line).map(|h| h.level), Some(level));
    }

    #[rstest]
    #[case("#hashtag")]
    #[case("#")]
    #[case("plain text")]
    #[case("")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(Heading::sig(line), None);
    }

    #[test]
    fn content_span_skips_marker_and_padding() {
        let line = "##   Spaced title";
        let sig = Heading::sig(line).unwrap();
        assert_eq!(sig.content.of(line), "Spaced title");
    }
}
