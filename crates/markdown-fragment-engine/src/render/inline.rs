use crate::Options;
use crate::parsing::inline::{InlineNode, kinds::Link, parse_inline};

use super::escape::{escape, escape_attribute};

/// Turns one line of raw text into an HTML-safe inline markup string.
///
/// Literal text is escaped exactly once; markup is only ever introduced for
/// constructs the parser recognized. Malformed syntax comes out as escaped text.
pub fn format_inline(line: &str, options: Options) -> String {
    let nodes = parse_inline(line, options);
    let mut out = String::with_capacity(line.len());
    render_nodes(line, &nodes, &mut out);
    out
}

fn render_nodes(s: &str, nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(&escape(sp.of(s))),
            InlineNode::Image { alt, src, .. } => {
                out.push_str("<img src=\"");
                out.push_str(&escape_attribute(src.of(s)));
                out.push_str("\" alt=\"");
                out.push_str(&escape_attribute(alt.of(s)));
                out.push_str("\">");
            }
            InlineNode::Strong { children, .. } => {
                out.push_str("<strong>");
                render_nodes(s, children, out);
                out.push_str("</strong>");
            }
            InlineNode::Emphasis { children, .. } => {
                out.push_str("<em>");
                render_nodes(s, children, out);
                out.push_str("</em>");
            }
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code>");
                out.push_str(&escape(inner.of(s)));
                out.push_str("</code>");
            }
            InlineNode::Link { label, href, .. } => {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"{}\" rel=\"{}\">",
                    escape_attribute(href.of(s)),
                    Link::TARGET,
                    Link::REL
                ));
                render_nodes(s, label, out);
                out.push_str("</a>");
            }
        }
    }
}
