use serde::Serialize;

use crate::parsing::rules::CharacterStyle;

/// A run of text sharing one style set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    /// Styles in the order they were applied, without duplicates.
    pub styles: Vec<CharacterStyle>,
    /// Extracted strings (link targets, mention ids), in rule order.
    pub metadata: Vec<String>,
}

impl Token {
    /// An unstyled token.
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            styles: vec![],
            metadata: vec![],
        }
    }

    pub fn has_style(&self, style: CharacterStyle) -> bool {
        self.styles.contains(&style)
    }
}
