//! # Inline Tokenizing
//!
//! Rule-driven styling of one line's text.
//!
//! ## Architecture
//!
//! Each line is expanded into one `Element` per character. The scanner first resolves
//! escapes, then applies every character rule in table order, mutating the elements in
//! place (styles, metadata, tag and boundary marks). The tokenizer finally coalesces
//! runs of equally styled elements into `Token`s.
//!
//! ## Modules
//!
//! - **`types`**: `Token`, the output unit
//! - **`kinds`**: inline syntax types with owned tag strings (CodeSpan, Link, Emphasis, ...)
//! - **`element`**: `Element` and its `Category`
//! - **`cursor`**: `Cursor` with the match-at-anchor and count-run helpers
//! - **`escapes`**: escape-run halving
//! - **`scanner`**: `ElementScanner`, the rule application pass
//! - **`tokenizer`**: `Tokenizer` and `coalesce`
//!
//! ## Raw Zone Precedence
//!
//! Code spans cancel every rule after them: `` `*a*` `` is one code token, not emphasis.
//! Links and images define boundaries, so a later rule never opens inside a link and
//! closes outside it.

pub mod cursor;
pub mod element;
pub mod escapes;
pub mod kinds;
pub mod scanner;
pub mod tokenizer;
pub mod types;

pub use element::{Category, Element};
pub use scanner::ElementScanner;
pub use tokenizer::Tokenizer;
pub use types::Token;
