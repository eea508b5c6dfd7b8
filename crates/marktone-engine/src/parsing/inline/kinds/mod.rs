//! # Inline Kinds
//!
//! Inline syntax types that own their tag strings.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` runs; a raw zone that cancels later rules
//! - **`Link`**: `[text](url)`, `[text][ref]` and their `!` image forms
//! - **`Emphasis`**: `*`, `_` and `~` runs
//! - **`Keyword`**: `<==keyword==>`
//! - **`Mention`**: `{{{mention:...}}}` spans and their identifier patterns
//!
//! The default rule table and the tokenizer read these constants rather than
//! hardcoding delimiters.

pub mod code_span;
pub mod emphasis;
pub mod keyword;
pub mod link;
pub mod mention;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use keyword::Keyword;
pub use link::Link;
pub use mention::Mention;
