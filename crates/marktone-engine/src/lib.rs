pub mod parsing;

pub use parsing::inline::Token;
pub use parsing::lines::ClassifiedLine;
pub use parsing::rules::{BlockStyle, CharacterStyle, Features, RuleError, RuleSet};
pub use parsing::{Document, MarkdownProcessor, StyledLine};
