use crate::parsing::rules::{AppliesTo, BlockStyle, RuleSet};

use super::ClassifiedLine;

/// Appends non-empty body lines to the list line right before them, joined by `\n`.
///
/// Runs forward, so several wrapped lines all land on the same item. A line made only
/// of underline characters (`---`, `===`) stays on its own.
pub fn merge_continuations(lines: &mut Vec<ClassifiedLine>, rules: &RuleSet) {
    let is_underline = |text: &str| {
        rules
            .block_rules
            .iter()
            .filter(|r| r.applies_to == AppliesTo::Previous)
            .any(|r| r.is_made_of_token_chars(text))
    };
    let mut merged: Vec<ClassifiedLine> = Vec::with_capacity(lines.len());
    for line in lines.drain(..) {
        if line.style == BlockStyle::Body && !line.text.is_empty() && !is_underline(&line.text) {
            if let Some(item) = merged.last_mut().filter(|prev| prev.style.is_list()) {
                item.text.push('\n');
                item.text.push_str(&line.text);
                continue;
            }
        }
        merged.push(line);
    }
    *lines = merged;
}

/// Assigns `indent_depth` to every list line by comparing its marker width with the
/// list lines above it.
///
/// A width difference of 0 or 1 means same level, 2 or 3 one level deeper. Any other
/// difference keeps scanning upward; a non-list line ends the scan. Lines that find no
/// qualifying ancestor stay at depth 0.
pub fn resolve_indentation(lines: &mut [ClassifiedLine]) {
    for i in 0..lines.len() {
        if !lines[i].style.is_list() {
            continue;
        }
        let width = lines[i].leading_space_width;
        let mut depth = 0;
        for prev in lines[..i].iter().rev() {
            if !prev.style.is_list() {
                break;
            }
            match width.checked_sub(prev.leading_space_width) {
                Some(0 | 1) => {
                    depth = prev.indent_depth;
                    break;
                }
                Some(2 | 3) => {
                    depth = prev.indent_depth + 1;
                    break;
                }
                _ => {}
            }
        }
        lines[i].indent_depth = depth;
    }
}
