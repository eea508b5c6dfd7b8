use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::rules::{AppliesTo, BlockStyle, RuleSet};

use super::kinds::ListItem;
use super::{front_matter, lists, references};

/// One logical output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    /// Text left after the block rule stripped its token.
    pub text: String,
    /// The exact token text that was stripped.
    pub raw_prefix: String,
    pub style: BlockStyle,
    /// List nesting level, 0 for top level and for every non-list line.
    pub indent_depth: usize,
    /// Indentation width of the list marker (space = 1, tab = 3). Always 0 for non-list lines.
    pub leading_space_width: usize,
}

impl ClassifiedLine {
    pub fn new(text: &str, raw_prefix: &str, style: BlockStyle) -> Self {
        let leading_space_width = if style.is_list() {
            ListItem::leading_space_width(raw_prefix)
        } else {
            0
        };
        Self {
            text: text.to_string(),
            raw_prefix: raw_prefix.to_string(),
            style,
            indent_depth: 0,
            leading_space_width,
        }
    }
}

/// Result of classifying a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub lines: Vec<ClassifiedLine>,
    pub front_matter: BTreeMap<String, String>,
    /// `[key]: value` definitions removed from `lines`.
    pub references: BTreeMap<String, String>,
}

/// Cross-line state. Built fresh for every document.
#[derive(Debug, Default)]
struct ClassifierState {
    /// Set while inside an until-close region; holds the line that ends it.
    close_token: Option<String>,
}

/// Classifies lines against the block rules of a [`RuleSet`].
pub struct LineClassifier<'r> {
    rules: &'r RuleSet,
}

impl<'r> LineClassifier<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Splits `text` into lines, strips front matter, classifies every line, then
    /// pulls out reference definitions, merges list continuations and resolves list depth.
    pub fn classify(&self, text: &str) -> Classification {
        let raw: Vec<&str> = text.lines().collect();
        let (body, front_matter) = front_matter::extract(&raw, &self.rules.front_matter);

        let mut state = ClassifierState::default();
        let mut lines = Vec::with_capacity(body.len());
        for line in body {
            self.classify_line(line, &mut state, &mut lines);
        }

        let references = references::extract(&mut lines);
        lists::merge_continuations(&mut lines, self.rules);
        lists::resolve_indentation(&mut lines);

        log::debug!(
            "classified {} raw line(s) into {} line(s), {} front matter key(s), {} reference(s)",
            raw.len(),
            lines.len(),
            front_matter.len(),
            references.len()
        );

        Classification {
            lines,
            front_matter,
            references,
        }
    }

    fn classify_line(&self, raw: &str, state: &mut ClassifierState, out: &mut Vec<ClassifiedLine>) {
        if let Some(close) = &state.close_token {
            if raw.trim() == close.as_str() {
                state.close_token = None;
            }
            return;
        }

        if raw.trim().is_empty() {
            if let Some(style) = self.rules.empty_line_style {
                out.push(ClassifiedLine::new("", "", style));
            }
            return;
        }

        for rule in &self.rules.block_rules {
            let candidate = if rule.trim_whitespace { raw.trim() } else { raw };
            let Some(extraction) = rule.extract(candidate) else {
                continue;
            };
            if extraction.text == candidate {
                continue;
            }
            match rule.applies_to {
                AppliesTo::Previous => self.restyle_previous(rule.style, raw.trim(), out),
                AppliesTo::UntilClose => {
                    state.close_token = Some(rule.token.trim().to_string());
                }
                AppliesTo::Current => {
                    // Code keeps its inner indentation; everything else is trimmed.
                    let text = if rule.style.should_tokenise() {
                        extraction.text.trim()
                    } else {
                        extraction.text.as_str()
                    };
                    out.push(ClassifiedLine::new(text, &extraction.prefix, rule.style));
                }
            }
            return;
        }

        let trimmed = raw.trim();
        let underline = self
            .rules
            .block_rules
            .iter()
            .filter(|r| r.applies_to == AppliesTo::Previous)
            .find(|r| r.is_made_of_token_chars(trimmed));
        match underline {
            Some(rule) => self.restyle_previous(rule.style, trimmed, out),
            None => out.push(ClassifiedLine::new(trimmed, "", self.rules.default_style)),
        }
    }

    /// Gives the previous line `style` when it is non-empty body text; otherwise `line`
    /// is kept as body text of its own.
    fn restyle_previous(&self, style: BlockStyle, line: &str, out: &mut Vec<ClassifiedLine>) {
        match out.last_mut() {
            Some(prev) if prev.style == BlockStyle::Body && !prev.text.is_empty() => {
                prev.style = style;
            }
            _ => out.push(ClassifiedLine::new(line, "", self.rules.default_style)),
        }
    }
}
