use crate::parsing::rules::CharacterRule;

use super::element::{Category, Element};

/// Length of the run of `escape` characters ending right before index `at`.
pub fn escape_run_before(elements: &[Element], at: usize, escape: char) -> usize {
    elements[..at.min(elements.len())]
        .iter()
        .rev()
        .take_while(|e| e.character == escape && e.category == Category::Literal)
        .count()
}

/// Marks escape characters that precede a tag character of some rule.
///
/// In a run of N escapes, every other one (starting from the first) becomes
/// [`Category::Escape`] and is elided, leaving N/2 literal escapes. When N is odd the
/// character after the run is marked escaped and can no longer be part of a tag.
pub fn resolve_escapes(elements: &mut [Element], rules: &[CharacterRule]) {
    let mut i = 0;
    while i < elements.len() {
        let escape = elements[i].character;
        if !rules.iter().any(|r| r.escape_characters.contains(&escape)) {
            i += 1;
            continue;
        }

        let mut end = i;
        while elements.get(end).is_some_and(|e| e.character == escape) {
            end += 1;
        }
        let Some(next) = elements.get(end).map(|e| e.character) else {
            break;
        };
        if rules.iter().any(|r| r.escapes(escape, next)) {
            let run = escape_run_before(elements, end, escape);
            for k in (end - run..end).step_by(2) {
                elements[k].category = Category::Escape;
            }
            if run % 2 == 1 {
                elements[end].escaped = true;
            }
        }
        i = end;
    }
}
