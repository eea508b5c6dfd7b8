use std::ops::Range;

use regex::Regex;
use serde::Serialize;

use super::RuleError;

/// Per-line classification assigned by the line classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockStyle {
    /// Plain paragraph text (the default when no rule matches).
    Body,
    /// A heading with its level (1..=6).
    Heading(u8),
    Blockquote,
    /// Indented code. Never tokenized.
    CodeBlock,
    UnorderedList,
    OrderedList,
}

impl BlockStyle {
    /// Whether lines of this style take part in list nesting and continuation merging.
    pub fn is_list(self) -> bool {
        matches!(self, BlockStyle::UnorderedList | BlockStyle::OrderedList)
    }

    /// Whether the line's text is run through the inline tokenizer.
    pub fn should_tokenise(self) -> bool {
        !matches!(self, BlockStyle::CodeBlock)
    }
}

/// Which side of a line a rule strips its token from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalSide {
    Leading,
    Trailing,
    /// Leading token required, trailing token stripped when present.
    Both,
    /// Never extracts; only meaningful for previous-line rules.
    None,
}

/// Which line a matching rule restyles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliesTo {
    Current,
    /// Rewrites the style of the previously emitted line (setext underlines).
    Previous,
    /// Toggles a hidden region that lasts until a line equal to the token is seen.
    UntilClose,
}

/// Custom prefix finder: returns the byte range of the marker to strip.
pub type Finder = fn(&str) -> Option<Range<usize>>;

/// How a block rule recognizes its token.
#[derive(Debug, Clone)]
pub enum MatchStrategy {
    /// `token` and `alternate_tokens` are literal strings.
    LiteralPrefix,
    /// `token` and `alternate_tokens` are regular expressions, compiled once.
    Regex(Vec<AnchoredPattern>),
    /// A function locates the marker.
    Finder(Finder),
}

/// A block rule regex compiled for both anchors.
#[derive(Debug, Clone)]
pub struct AnchoredPattern {
    leading: Regex,
    trailing: Regex,
}

impl AnchoredPattern {
    fn compile(pattern: &str) -> Result<Self, RuleError> {
        let build = |anchored: String| {
            Regex::new(&anchored).map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        };
        Ok(Self {
            leading: build(format!("^(?:{pattern})"))?,
            trailing: build(format!("(?:{pattern})$"))?,
        })
    }
}

/// The outcome of stripping a rule's token from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The exact text that was removed (the leading marker when there is one).
    pub prefix: String,
    /// What is left of the line.
    pub text: String,
}

/// A line-level rule.
#[derive(Debug, Clone)]
pub struct BlockRule {
    pub token: String,
    pub alternate_tokens: Vec<String>,
    pub strategy: MatchStrategy,
    pub removal: RemovalSide,
    pub style: BlockStyle,
    pub trim_whitespace: bool,
    pub applies_to: AppliesTo,
}

impl BlockRule {
    /// A rule stripping a literal leading token from a trimmed line.
    pub fn literal(token: &str, style: BlockStyle) -> Self {
        Self {
            token: token.to_string(),
            alternate_tokens: vec![],
            strategy: MatchStrategy::LiteralPrefix,
            removal: RemovalSide::Leading,
            style,
            trim_whitespace: true,
            applies_to: AppliesTo::Current,
        }
    }

    /// A rule whose token is a regular expression.
    pub fn regex(pattern: &str, style: BlockStyle) -> Result<Self, RuleError> {
        Ok(Self {
            strategy: MatchStrategy::Regex(vec![AnchoredPattern::compile(pattern)?]),
            ..Self::literal(pattern, style)
        })
    }

    /// A rule whose marker is located by `finder`. `name` only describes the rule.
    pub fn finder(name: &str, finder: Finder, style: BlockStyle) -> Self {
        Self {
            strategy: MatchStrategy::Finder(finder),
            ..Self::literal(name, style)
        }
    }

    /// Adds tokens tried after the primary one. Regex rules compile them here.
    pub fn with_alternates(mut self, tokens: &[&str]) -> Result<Self, RuleError> {
        for token in tokens {
            if let MatchStrategy::Regex(patterns) = &mut self.strategy {
                patterns.push(AnchoredPattern::compile(token)?);
            }
            self.alternate_tokens.push(token.to_string());
        }
        Ok(self)
    }

    pub fn removing(mut self, removal: RemovalSide) -> Self {
        self.removal = removal;
        self
    }

    /// Keeps leading and trailing whitespace, so the marker can capture indentation.
    pub fn untrimmed(mut self) -> Self {
        self.trim_whitespace = false;
        self
    }

    pub fn applying_to(mut self, applies_to: AppliesTo) -> Self {
        self.applies_to = applies_to;
        self
    }

    /// The primary token followed by the alternates.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.token.as_str()).chain(self.alternate_tokens.iter().map(String::as_str))
    }

    /// Applies this rule's removal side to `line`.
    ///
    /// Returns `None` when the rule does not extract anything.
    pub fn extract(&self, line: &str) -> Option<Extraction> {
        match self.removal {
            RemovalSide::Leading => self.strip_leading(line),
            RemovalSide::Trailing => self.strip_trailing(line),
            RemovalSide::Both => {
                let leading = self.strip_leading(line)?;
                match self.strip_trailing(&leading.text) {
                    Some(trailing) => Some(Extraction {
                        prefix: leading.prefix,
                        text: trailing.text,
                    }),
                    None => Some(leading),
                }
            }
            RemovalSide::None => None,
        }
    }

    pub fn strip_leading(&self, line: &str) -> Option<Extraction> {
        let prefix_len = match &self.strategy {
            MatchStrategy::LiteralPrefix => self
                .tokens()
                .find(|t| !t.is_empty() && line.starts_with(t))
                .map(str::len)?,
            MatchStrategy::Regex(patterns) => patterns
                .iter()
                .filter_map(|p| p.leading.find(line))
                .find(|m| !m.is_empty())
                .map(|m| m.end())?,
            MatchStrategy::Finder(finder) => {
                let range = finder(line)?;
                if range.start != 0 || range.is_empty() || !line.is_char_boundary(range.end) {
                    return None;
                }
                range.end
            }
        };
        Some(Extraction {
            prefix: line[..prefix_len].to_string(),
            text: line[prefix_len..].to_string(),
        })
    }

    /// Strips a closing token (`## Title ##`). What remains must be empty or end in
    /// whitespace, so `C#` keeps its `#`.
    pub fn strip_trailing(&self, line: &str) -> Option<Extraction> {
        let start = match &self.strategy {
            MatchStrategy::LiteralPrefix => self.tokens().find_map(|t| {
                let t = t.trim();
                if t.is_empty() {
                    return None;
                }
                line.strip_suffix(t).map(str::len)
            })?,
            MatchStrategy::Regex(patterns) => patterns
                .iter()
                .filter_map(|p| p.trailing.find(line))
                .find(|m| !m.is_empty())
                .map(|m| m.start())?,
            MatchStrategy::Finder(_) => return None,
        };
        let rest = &line[..start];
        if !rest.is_empty() && !rest.ends_with(char::is_whitespace) {
            return None;
        }
        Some(Extraction {
            prefix: line[start..].to_string(),
            text: rest.to_string(),
        })
    }

    /// True when `line` is non-empty and made only of characters from this rule's tokens.
    pub fn is_made_of_token_chars(&self, line: &str) -> bool {
        !line.is_empty() && line.chars().all(|c| self.tokens().any(|t| t.contains(c)))
    }
}

/// Delimiters of a key/value preamble (`---` ... `---`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterRule {
    pub open: String,
    pub close: String,
    pub separator: char,
}

impl FrontMatterRule {
    pub fn new(open: &str, close: &str, separator: char) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            separator,
        }
    }

    /// YAML-style `---` fenced preamble with `key: value` lines.
    pub fn yaml() -> Self {
        Self::new("---", "---", ':')
    }
}
