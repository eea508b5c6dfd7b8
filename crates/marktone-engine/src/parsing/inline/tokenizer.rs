use std::collections::BTreeMap;

use crate::parsing::rules::{CharacterRule, CharacterStyle};

use super::element::{Category, Element};
use super::kinds::Mention;
use super::scanner::ElementScanner;
use super::types::Token;

/// Turns one line of text into styled tokens.
pub struct Tokenizer<'a> {
    rules: &'a [CharacterRule],
    metadata_lookup: &'a BTreeMap<String, String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(rules: &'a [CharacterRule], metadata_lookup: &'a BTreeMap<String, String>) -> Self {
        Self {
            rules,
            metadata_lookup,
        }
    }

    /// Scans `text` with every rule and coalesces the result.
    ///
    /// Always returns at least one token: empty text gives one empty token and a
    /// tokenizer without rules returns the text untouched.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() || self.rules.is_empty() {
            return vec![Token::plain(text)];
        }
        let elements = ElementScanner::new(text, self.metadata_lookup).scan(self.rules);
        let tokens = coalesce(&elements);
        if tokens.is_empty() {
            return vec![Token::plain("")];
        }
        tokens
    }
}

/// Groups consecutive elements with equal style sets into tokens.
///
/// Tags and metadata end the current run and are dropped. Elided escapes are skipped
/// without ending the run, except inside code where they are kept as typed. Each token
/// takes the metadata of its last element.
pub fn coalesce(elements: &[Element]) -> Vec<Token> {
    let mut tokens = vec![];
    let mut pending = Token::plain("");

    for e in elements {
        match e.category {
            Category::Tag | Category::Metadata => {
                flush(&mut pending, &mut tokens);
                continue;
            }
            Category::Escape if !e.styles.contains(&CharacterStyle::Code) => continue,
            _ => {}
        }
        if e.styles != pending.styles {
            flush(&mut pending, &mut tokens);
            pending.styles = e.styles.clone();
        }
        pending.text.push(e.character);
        pending.metadata.clone_from(&e.metadata);
    }
    flush(&mut pending, &mut tokens);
    tokens
}

fn flush(pending: &mut Token, tokens: &mut Vec<Token>) {
    if pending.text.is_empty() {
        return;
    }
    let mut token = std::mem::replace(pending, Token::plain(""));
    pending.styles = token.styles.clone();
    Mention::rewrite(&mut token.text, &mut token.styles, &mut token.metadata);
    tokens.push(token);
}
