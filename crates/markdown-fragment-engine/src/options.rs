use serde::{Deserialize, Serialize};

/// Capability set shared by every call site of the converter.
///
/// Each flag switches one optional construct on or off. With a flag off the
/// construct's syntax is treated as ordinary text (a pipe line becomes a
/// paragraph, `![a](b)` becomes `!` followed by a link, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Pipe tables.
    pub tables: bool,
    /// Raw HTML blocks passed through unescaped.
    pub raw_html: bool,
    /// `![alt](src)` images.
    pub images: bool,
}

impl Options {
    /// Every optional construct enabled.
    pub const ALL: Options = Options {
        tables: true,
        raw_html: true,
        images: true,
    };

    /// Headings, lists, paragraphs and the core inline spans only.
    pub const BASIC: Options = Options {
        tables: false,
        raw_html: false,
        images: false,
    };
}

impl Default for Options {
    fn default() -> Self {
        Self::ALL
    }
}
