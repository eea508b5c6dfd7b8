//! # Line Kinds
//!
//! Block-level syntax types that own their delimiters.
//!
//! ## Types
//!
//! - **`ListItem`**: bullet finder, ordered-marker pattern, indentation width
//! - **`BlockQuote`**: `>` prefix finder supporting nested `> >` quotes
//! - **`Heading`**: `#` markers and setext underlines
//! - **`IndentedCode`**: four-space and tab indents
//! - **`HiddenBlock`**: `%%` delimited regions dropped from output
//!
//! The default rule table reads these constants; the classifier never hardcodes them.

pub mod block_quote;
pub mod heading;
pub mod hidden_block;
pub mod indented_code;
pub mod list_item;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use hidden_block::HiddenBlock;
pub use indented_code::IndentedCode;
pub use list_item::ListItem;
