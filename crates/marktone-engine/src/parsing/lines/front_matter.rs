use std::collections::BTreeMap;

use crate::parsing::rules::FrontMatterRule;

/// Splits a leading front matter block off `lines`.
///
/// Returns the lines left for classification and the collected `key → value` pairs.
/// Only the first rule whose open token equals line 0 (trimmed) is used, and only when
/// a second line exists. An unterminated block swallows the rest of the input.
pub fn extract<'a>(
    lines: &[&'a str],
    rules: &[FrontMatterRule],
) -> (Vec<&'a str>, BTreeMap<String, String>) {
    let mut entries = BTreeMap::new();

    let Some(first) = lines.first() else {
        return (vec![], entries);
    };
    let Some(rule) = rules.iter().find(|r| first.trim() == r.open) else {
        return (lines.to_vec(), entries);
    };
    if lines.len() < 2 {
        return (lines.to_vec(), entries);
    }

    let mut rest = lines[1..].iter();
    let mut closed = false;
    for line in rest.by_ref() {
        if line.trim() == rule.close {
            closed = true;
            break;
        }
        if let Some((key, value)) = line.split_once(rule.separator) {
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    if !closed {
        log::debug!(
            "front matter opened with `{}` was never closed; {} key(s) consumed the document",
            rule.open,
            entries.len()
        );
    }

    let body = rest
        .copied()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    (body, entries)
}
