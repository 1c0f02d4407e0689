/// Strong emphasis (`**text**`).
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// Single-delimiter emphasis (`*text*` or `_text_`).
///
/// The asterisk form may open and close anywhere. The underscore form only
/// matches at word boundaries, so `snake_case_name` stays literal.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Word characters for the underscore boundary rule.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars() {
        assert!(Emphasis::is_word_char('a'));
        assert!(Emphasis::is_word_char('7'));
        assert!(Emphasis::is_word_char('_'));
        assert!(Emphasis::is_word_char('ü'));
        assert!(!Emphasis::is_word_char(' '));
        assert!(!Emphasis::is_word_char(';'));
    }
}
