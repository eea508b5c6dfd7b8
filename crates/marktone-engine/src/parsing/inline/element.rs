use crate::parsing::rules::CharacterStyle;

/// Coarse role of one character during inline scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Literal,
    /// An escape character that is elided from output.
    Escape,
    Space,
    Newline,
    /// Text inside a metadata tag pair, carried on the span instead of rendered.
    Metadata,
    /// A matched delimiter, dropped from output.
    Tag,
}

/// One input character plus the annotations rules attach to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub character: char,
    pub category: Category,
    /// Preceded by an odd run of escape characters; can never be part of a tag.
    pub escaped: bool,
    /// Id of the innermost boundary region holding this element, 0 when none.
    pub boundary: usize,
    /// Claimed by a cancelling rule; invisible to every later rule.
    pub match_complete: bool,
    /// Styles in the order rules applied them, without duplicates.
    pub styles: Vec<CharacterStyle>,
    pub metadata: Vec<String>,
}

impl Element {
    pub fn new(character: char) -> Self {
        let category = match character {
            '\n' => Category::Newline,
            c if c.is_whitespace() => Category::Space,
            _ => Category::Literal,
        };
        Self {
            character,
            category,
            escaped: false,
            boundary: 0,
            match_complete: false,
            styles: vec![],
            metadata: vec![],
        }
    }

    /// One element per character of `text`.
    pub fn from_text(text: &str) -> Vec<Self> {
        text.chars().map(Self::new).collect()
    }

    /// Whether a rule may use this element as part of a tag.
    pub fn is_available(&self) -> bool {
        matches!(
            self.category,
            Category::Literal | Category::Space | Category::Newline
        ) && !self.escaped
            && !self.match_complete
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.category, Category::Space | Category::Newline)
    }

    pub fn add_style(&mut self, style: CharacterStyle) {
        if !self.styles.contains(&style) {
            self.styles.push(style);
        }
    }
}
