//! # Inline Parsing
//!
//! Cursor-based inline parsing with an explicit precedence contract.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and operates on one line at
//! a time (heading text, list item text, table cell, paragraph). It builds a
//! small span tree; escaping and markup happen later, in `render::inline`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Image, Strong, Emphasis, CodeSpan, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning over a bounded range
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Precedence
//!
//! image > strong > emphasis > code > link. Code spans are raw zones:
//! `` `[not](a link)` `` parses as a single CodeSpan.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
