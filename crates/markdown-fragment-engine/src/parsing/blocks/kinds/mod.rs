pub mod heading;
pub mod html_block;
pub mod list_item;
pub mod table;

pub use heading::{Heading, HeadingSig};
pub use html_block::{HtmlBlock, extract_html_block};
pub use list_item::ListItem;
pub use table::{Table, TableBlock, parse_table};
