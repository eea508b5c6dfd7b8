//! # Rule Tables
//!
//! Immutable, order-significant descriptions of what the engine matches.
//!
//! ## Modules
//!
//! - **`block`**: `BlockRule` (line-level), `FrontMatterRule`, `BlockStyle`
//! - **`character`**: `CharacterRule` (inline-level), `CharacterRuleTag`, `CharacterStyle`
//! - **`markdown`**: `Features` flags and the default Markdown `RuleSet`
//!
//! ## Key Invariants
//!
//! - Table order is priority order: the first block rule that matches a line wins,
//!   and earlier character rules claim spans before later ones.
//! - A `RuleSet` is never mutated by processing. All per-document state lives in
//!   the classifier and scanner, so one set can be shared across threads.

pub mod block;
pub mod character;
pub mod markdown;

pub use block::{
    AppliesTo, BlockRule, BlockStyle, Extraction, Finder, FrontMatterRule, MatchStrategy,
    RemovalSide,
};
pub use character::{CharacterRule, CharacterRuleTag, CharacterStyle, TagRole};
pub use markdown::Features;

/// Errors raised while building rule tables.
///
/// Input text never produces an error; only a malformed rule definition does.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid block rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// The complete, ordered rule configuration consumed by the engine.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Candidate front matter delimiters. The first whose open token matches line 0 is used.
    pub front_matter: Vec<FrontMatterRule>,
    /// Line-level rules, evaluated in order.
    pub block_rules: Vec<BlockRule>,
    /// Inline rules, applied in order.
    pub character_rules: Vec<CharacterRule>,
    /// Style given to lines no rule matches.
    pub default_style: BlockStyle,
    /// Style given to blank lines. `None` drops blank lines entirely.
    pub empty_line_style: Option<BlockStyle>,
}

impl RuleSet {
    /// A rule set that matches nothing: every line is body text, every line one token.
    pub fn empty() -> Self {
        Self {
            front_matter: vec![],
            block_rules: vec![],
            character_rules: vec![],
            default_style: BlockStyle::Body,
            empty_line_style: None,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::empty()
    }
}
