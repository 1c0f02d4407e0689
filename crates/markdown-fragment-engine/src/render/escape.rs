use std::borrow::Cow;

/// Escapes `&`, `<` and `>` in a literal text run.
///
/// Borrows when nothing needs escaping, so text free of those characters is
/// returned unchanged and escaping it again is a no-op.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escapes text for a double-quoted attribute value: `&`, `<`, `>` and `"`.
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}
