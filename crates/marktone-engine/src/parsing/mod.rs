pub mod inline;
pub mod lines;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;

use inline::{Token, Tokenizer};
use lines::{ClassifiedLine, LineClassifier};
use rules::RuleSet;

/// A classified line with its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledLine {
    pub line: ClassifiedLine,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub lines: Vec<StyledLine>,
    pub front_matter: BTreeMap<String, String>,
    /// Reference definitions found in the document.
    pub references: BTreeMap<String, String>,
}

impl Document {
    pub fn front_matter(&self, key: &str) -> Option<&str> {
        self.front_matter.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Runs the line classifier and the tokenizer over whole documents.
///
/// Holds only immutable configuration, so one processor can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
    rules: RuleSet,
    metadata_lookup: BTreeMap<String, String>,
}

impl MarkdownProcessor {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            metadata_lookup: BTreeMap::new(),
        }
    }

    /// Extra lookup entries for reference-style rules. A document's own `[key]: value`
    /// definitions take precedence over these.
    pub fn with_metadata_lookup(mut self, lookup: BTreeMap<String, String>) -> Self {
        self.metadata_lookup = lookup;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn process(&self, text: &str) -> Document {
        let classification = LineClassifier::new(&self.rules).classify(text);

        let mut lookup = self.metadata_lookup.clone();
        lookup.extend(classification.references.clone());
        let tokenizer = Tokenizer::new(&self.rules.character_rules, &lookup);

        let lines: Vec<StyledLine> = classification
            .lines
            .into_iter()
            .map(|line| {
                let tokens = if line.style.should_tokenise() {
                    tokenizer.tokenize(&line.text)
                } else {
                    vec![Token::plain(&line.text)]
                };
                StyledLine { line, tokens }
            })
            .collect();

        log::debug!(
            "processed document: {} line(s), {} token(s)",
            lines.len(),
            lines.iter().map(|l| l.tokens.len()).sum::<usize>()
        );

        Document {
            lines,
            front_matter: classification.front_matter,
            references: classification.references,
        }
    }
}
