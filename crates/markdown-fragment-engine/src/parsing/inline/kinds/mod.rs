//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Image`**: `OPEN = b"![", ALT_CLOSE = b"](", CLOSE = b')'`
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `STAR = b'*'`, `UNDERSCORE = b'_'` plus the word-boundary rule
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `OPEN = b'['`, `LABEL_CLOSE = b"]("`, `CLOSE = b')'`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use image::Image;
pub use link::Link;
