use std::collections::BTreeMap;
use std::ops::Range;

use crate::parsing::rules::{CharacterRule, CharacterRuleTag, CharacterStyle, TagRole};

use super::cursor::Cursor;
use super::element::{Category, Element};
use super::escapes::resolve_escapes;

/// Positions of one confirmed match, as element index ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SpanMatch {
    /// From the first open tag element to the last closing element.
    span: Range<usize>,
    content: Range<usize>,
    /// Every delimiter, including the metadata tags.
    tags: Vec<Range<usize>>,
    /// Interior of the metadata tags.
    metadata: Option<Range<usize>>,
}

/// Applies character rules to the elements of one line.
///
/// Rules run in table order. Each one mutates the shared element array, so later rules
/// see the tags, boundaries and claimed spans left by earlier ones.
pub struct ElementScanner<'a> {
    elements: Vec<Element>,
    metadata_lookup: &'a BTreeMap<String, String>,
    /// Last boundary id handed out.
    boundaries: usize,
}

impl<'a> ElementScanner<'a> {
    pub fn new(text: &str, metadata_lookup: &'a BTreeMap<String, String>) -> Self {
        Self {
            elements: Element::from_text(text),
            metadata_lookup,
            boundaries: 0,
        }
    }

    /// Resolves escapes, then applies every rule in order.
    pub fn scan(mut self, rules: &[CharacterRule]) -> Vec<Element> {
        resolve_escapes(&mut self.elements, rules);
        for rule in rules {
            self.apply(rule);
        }
        self.elements
    }

    fn apply(&mut self, rule: &CharacterRule) {
        let spans = if rule.is_repeating() {
            self.apply_repeating(rule)
        } else {
            self.apply_open_close(rule)
        };
        log::trace!("{rule}: {} match(es)", spans.len());
    }

    fn cursor(&self, i: usize) -> Cursor<'_> {
        Cursor::new(&self.elements, i)
    }

    /// Non-overlapping occurrences of `tag` among available elements.
    fn count(&self, tag: &str) -> usize {
        let width = tag.chars().count();
        let mut count = 0;
        let mut i = 0;
        while i < self.elements.len() {
            if self.cursor(i).starts_with(tag) {
                count += 1;
                i += width;
            } else {
                i += 1;
            }
        }
        count
    }

    fn apply_open_close(&mut self, rule: &CharacterRule) -> Vec<Range<usize>> {
        let Some(close) = rule.tag(TagRole::Close).cloned() else {
            return vec![];
        };
        let metadata_tags = rule
            .tag(TagRole::MetadataOpen)
            .cloned()
            .zip(rule.tag(TagRole::MetadataClose).cloned());
        let opens: Vec<CharacterRuleTag> = rule.open_tags().cloned().collect();

        if rule.requires_balanced_tag_count {
            let open_count: usize = opens.iter().map(|t| self.count(&t.text)).sum();
            let close_count = self.count(&close.text);
            if open_count == 0 || close_count % open_count != 0 {
                log::trace!("{rule}: {open_count} open vs {close_count} close, skipped");
                return vec![];
            }
        }

        let mut spans = vec![];
        let mut i = 0;
        while i < self.elements.len() {
            let Some(open) = opens.iter().find(|t| self.cursor(i).starts_with(&t.text)) else {
                i += 1;
                continue;
            };
            match self.find_open_close(i, open, &close, metadata_tags.as_ref()) {
                Some(m) => {
                    let content_start = m.content.start;
                    self.apply_match(rule, &m, &rule.styles_for_group(1));
                    spans.push(m.span);
                    i = content_start;
                }
                None => i += 1,
            }
        }
        spans
    }

    fn find_open_close(
        &self,
        at: usize,
        open: &CharacterRuleTag,
        close: &CharacterRuleTag,
        metadata_tags: Option<&(CharacterRuleTag, CharacterRuleTag)>,
    ) -> Option<SpanMatch> {
        let boundary = self.elements[at].boundary;
        let content_start = at + open.text.chars().count();
        let close_start = self.find_close(content_start, &open.text, &close.text, boundary)?;
        let close_end = close_start + close.text.chars().count();

        let mut m = SpanMatch {
            span: at..close_end,
            content: content_start..close_start,
            tags: vec![at..content_start, close_start..close_end],
            metadata: None,
        };

        if let Some((meta_open, meta_close)) = metadata_tags {
            if !self.cursor(close_end).starts_with(&meta_open.text)
                || self.elements[close_end].boundary != boundary
            {
                return None;
            }
            let interior_start = close_end + meta_open.text.chars().count();
            let interior_end =
                self.find_close(interior_start, &meta_open.text, &meta_close.text, boundary)?;
            let end = interior_end + meta_close.text.chars().count();
            m.span = at..end;
            m.tags.push(close_end..interior_start);
            m.tags.push(interior_end..end);
            m.metadata = Some(interior_start..interior_end);
        }
        Some(m)
    }

    /// Finds `close` from `from` within `boundary`, skipping nested `open`..`close`
    /// pairs when the two texts differ.
    fn find_close(&self, from: usize, open: &str, close: &str, boundary: usize) -> Option<usize> {
        let nests = open != close;
        let open_width = open.chars().count();
        let close_width = close.chars().count();
        let mut depth = 0usize;
        let mut j = from;
        while j < self.elements.len() {
            if self.elements[j].boundary != boundary {
                j += 1;
                continue;
            }
            let cur = self.cursor(j);
            if nests && cur.starts_with(open) {
                depth += 1;
                j += open_width;
            } else if cur.starts_with(close) {
                if depth == 0 {
                    return Some(j);
                }
                depth -= 1;
                j += close_width;
            } else {
                j += 1;
            }
        }
        None
    }

    fn apply_repeating(&mut self, rule: &CharacterRule) -> Vec<Range<usize>> {
        let tag = rule.primary_tag.text.clone();
        let width = tag.chars().count();
        if width == 0 {
            return vec![];
        }

        if rule.requires_balanced_tag_count {
            let count = self.count(&tag);
            if count % (2 * rule.min_repeat()) != 0 {
                log::trace!("{rule}: {count} unbalanced tag(s), skipped");
                return vec![];
            }
        }

        let mut spans = vec![];
        let mut i = 0;
        while i < self.elements.len() {
            let run = self.cursor(i).run_length(&tag);
            if run == 0 {
                i += 1;
                continue;
            }
            let open_end = i + run * width;
            if run < rule.min_repeat() || run > rule.max_repeat() || !self.can_open(i, open_end, rule)
            {
                i = open_end;
                continue;
            }
            if let Some(close_start) = self.find_closing_run(open_end, run, &tag, rule, i) {
                let close_end = close_start + run * width;
                let m = SpanMatch {
                    span: i..close_end,
                    content: open_end..close_start,
                    tags: vec![i..open_end, close_start..close_end],
                    metadata: None,
                };
                self.apply_match(rule, &m, &rule.styles_for_group(run));
                spans.push(m.span);
            }
            i = open_end;
        }
        spans
    }

    /// An opening run needs start-of-line or whitespace before it and a non-space after
    /// it, when the rule asks for surrounding space.
    fn can_open(&self, start: usize, end: usize, rule: &CharacterRule) -> bool {
        if !rule.requires_surrounding_space {
            return true;
        }
        let before = start == 0 || self.elements[start - 1].is_whitespace();
        let after = self.elements.get(end).is_some_and(|e| !e.is_whitespace());
        before && after
    }

    fn find_closing_run(
        &self,
        from: usize,
        run: usize,
        tag: &str,
        rule: &CharacterRule,
        open_at: usize,
    ) -> Option<usize> {
        let width = tag.chars().count();
        let boundary = self.elements[open_at].boundary;
        let mut j = from;
        while j < self.elements.len() {
            let found = self.cursor(j).run_length(tag);
            if found == 0 {
                j += 1;
                continue;
            }
            let end = j + found * width;
            let closes = !rule.requires_surrounding_space
                || self.elements.get(end).is_none_or(Element::is_whitespace);
            if found == run && j > from && self.elements[j].boundary == boundary && closes {
                return Some(j);
            }
            j = end;
        }
        None
    }

    fn apply_match(&mut self, rule: &CharacterRule, m: &SpanMatch, styles: &[CharacterStyle]) {
        let metadata = m.metadata.clone().map(|interior| {
            let raw = self.text(interior);
            if rule.uses_metadata_lookup {
                let key = if raw.trim().is_empty() {
                    self.text(m.content.clone())
                } else {
                    raw
                };
                self.metadata_lookup
                    .get(key.trim())
                    .cloned()
                    .unwrap_or_default()
            } else {
                raw
            }
        });

        if rule.defines_boundary {
            self.boundaries += 1;
            let outer = self.elements[m.span.start].boundary;
            for e in &mut self.elements[m.span.clone()] {
                if e.boundary == outer {
                    e.boundary = self.boundaries;
                }
            }
        }

        for e in &mut self.elements[m.content.clone()] {
            if e.match_complete || matches!(e.category, Category::Tag | Category::Metadata) {
                continue;
            }
            for style in styles {
                e.add_style(*style);
            }
            if let Some(metadata) = &metadata {
                e.metadata.push(metadata.clone());
            }
        }
        for tag in &m.tags {
            for e in &mut self.elements[tag.clone()] {
                e.category = Category::Tag;
            }
        }
        if let Some(interior) = m.metadata.clone() {
            for e in &mut self.elements[interior] {
                e.category = Category::Metadata;
            }
        }
        // Claimed at once so the rest of this rule's pass cannot match inside the span.
        if rule.cancels_remaining_rules {
            for e in &mut self.elements[m.span.clone()] {
                e.match_complete = true;
            }
        }
    }

    fn text(&self, range: Range<usize>) -> String {
        self.elements[range].iter().map(|e| e.character).collect()
    }
}
