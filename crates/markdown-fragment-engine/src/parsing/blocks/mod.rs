//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, heading/bullet markers, HTML opener, pipes)
//!
//! 2. **Block Grouping** (`scanner`): A `BlockScanner` walks the classified lines once,
//!    collecting runs of lines into `BlockNode`s by lookahead
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, ListItem, Table, HtmlBlock)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`scanner`**: `BlockScanner` groups lines into blocks
//!
//! ## Key Invariants
//!
//! - A list holds only directly adjacent bullet lines
//! - A blank line ends any list or table immediately
//! - Raw HTML blocks are raw zones: no block or inline parsing inside
//! - All block nodes store byte spans into the rope

pub mod classify;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use scanner::BlockScanner;
pub use types::{BlockKind, BlockNode};
