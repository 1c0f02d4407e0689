//! # Rendering
//!
//! Second pass of conversion: maps each parsed block to HTML and
//! concatenates the results in document order, with no separators.
//!
//! - **`escape`**: the only place literal text is escaped
//! - **`inline`**: `format_inline()` for heading, list item, cell and paragraph text

pub mod escape;
pub mod inline;

use xi_rope::Rope;

use crate::Options;
use crate::parsing::{
    blocks::{BlockKind, BlockNode, kinds::TableBlock},
    rope::{slice::slice_to_string, span::Span},
};

pub use escape::{escape, escape_attribute};
pub use inline::format_inline;

/// Renders parsed blocks into a single HTML fragment.
pub fn assemble(rope: &Rope, blocks: &[BlockNode], options: Options) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(rope, block, options, &mut out);
    }
    out
}

fn render_block(rope: &Rope, block: &BlockNode, options: Options, out: &mut String) {
    let inline = |sp: Span| format_inline(&slice_to_string(rope, sp), options);

    match &block.kind {
        BlockKind::Heading { level, content } => {
            out.push_str(&format!("<h{level}>{}</h{level}>", inline(*content)));
        }
        BlockKind::List { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                out.push_str(&inline(*item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        BlockKind::Table(table) => render_table(table, &inline, out),
        BlockKind::HtmlBlock { lines } => {
            let lines: Vec<String> = lines.iter().map(|sp| slice_to_string(rope, *sp)).collect();
            out.push_str(&lines.join("\n"));
        }
        BlockKind::Paragraph { content } => {
            out.push_str("<p>");
            out.push_str(&inline(*content));
            out.push_str("</p>");
        }
    }
}

fn render_table(table: &TableBlock, inline: &impl Fn(Span) -> String, out: &mut String) {
    out.push_str("<table>");
    if let Some(header) = &table.header {
        out.push_str("<thead>");
        render_row(header, "th", inline, out);
        out.push_str("</thead>");
    }
    out.push_str("<tbody>");
    for row in &table.rows {
        render_row(row, "td", inline, out);
    }
    out.push_str("</tbody></table>");
}

fn render_row(cells: &[Span], tag: &str, inline: &impl Fn(Span) -> String, out: &mut String) {
    out.push_str("<tr>");
    for cell in cells {
        out.push_str(&format!("<{tag}>{}</{tag}>", inline(*cell)));
    }
    out.push_str("</tr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn render(src: &str) -> String {
        let rope = Rope::from(src);
        let doc = parse_document(&rope, Options::default());
        assemble(&rope, &doc.blocks, Options::default())
    }

    #[test]
    fn heading_levels() {
        assert_eq!(render("# One\n### Three"), "<h1>One</h1><h3>Three</h3>");
    }

    #[test]
    fn list_items_are_formatted() {
        assert_eq!(
            render("- **a**\n- `b`"),
            "<ul><li><strong>a</strong></li><li><code>b</code></li></ul>"
        );
    }

    #[test]
    fn table_without_header_has_no_thead() {
        assert_eq!(
            render("a | b\n1 | 2"),
            "<table><tbody><tr><td>a</td><td>b</td></tr><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn table_cells_are_inline_formatted() {
        assert_eq!(
            render("| *x* | y |\n| --- | --- |\n| 1 | `2` |"),
            "<table><thead><tr><th><em>x</em></th><th>y</th></tr></thead>\
             <tbody><tr><td>1</td><td><code>2</code></td></tr></tbody></table>"
        );
    }

    #[test]
    fn html_block_lines_joined_verbatim() {
        assert_eq!(
            render("<div>\n  <b>x & y</b>\n</div>"),
            "<div>\n  <b>x & y</b>\n</div>"
        );
    }

    #[test]
    fn html_block_keeps_terminating_blank_line() {
        assert_eq!(render("<div>x</div>\r\n\r\nafter"), "<div>x</div>\n<p>after</p>");
    }
}
