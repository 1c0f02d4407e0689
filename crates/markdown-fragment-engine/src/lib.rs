//! Markdown to HTML fragment conversion for static content pages.
//!
//! [`convert_markdown_to_html`] takes a whole document and returns a complete
//! HTML fragment. It never fails: malformed syntax degrades to escaped text.
//! The [`blog`] and [`io`] modules cover the post index and file handling
//! used by the command-line front end.

pub mod blog;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

use xi_rope::Rope;

pub use options::Options;
pub use render::{escape, format_inline};

/// Converts a Markdown document with every optional construct enabled.
pub fn convert_markdown_to_html(source: &str) -> String {
    convert_with(source, Options::default())
}

/// Converts a Markdown document using the given capability set.
pub fn convert_with(source: &str, options: Options) -> String {
    let rope = Rope::from(source);
    let doc = parsing::parse_document(&rope, options);
    render::assemble(&rope, &doc.blocks, options)
}

#[cfg(test)]
pub mod tests;
