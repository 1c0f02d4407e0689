use crate::parsing::rope::span::Span;

/// Bullet list item block type with owned marker constants.
pub struct ListItem;

impl ListItem {
    /// Characters that open a bullet item when followed by whitespace.
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Returns the item content span of a bullet line, relative to `trimmed`.
    ///
    /// A bare marker (`-` alone) is not an item.
    pub fn sig(trimmed: &str) -> Option<Span> {
        let mut chars = trimmed.chars();
        let marker = chars.next()?;
        if !Self::MARKERS.contains(&marker) {
            return None;
        }
        let rest = chars.as_str();
        if !rest.starts_with([' ', '\t']) {
            return None;
        }

        let content = rest.trim();
        if content.is_empty() {
            return None;
        }
        let start = marker.len_utf8() + (rest.len() - rest.trim_start().len());
        Some(Span::new(start, start + content.len()))
    }
}
