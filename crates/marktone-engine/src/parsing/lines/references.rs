use std::collections::BTreeMap;

use crate::parsing::inline::kinds::Link;

use super::ClassifiedLine;

/// Removes `[key]: value` lines and returns them as a lookup table.
///
/// Only tokenizable lines are considered, so an indented code line is never a definition.
/// Later definitions of the same key win.
pub fn extract(lines: &mut Vec<ClassifiedLine>) -> BTreeMap<String, String> {
    let mut definitions = BTreeMap::new();
    lines.retain(|line| {
        if !line.style.should_tokenise() {
            return true;
        }
        match parse_definition(&line.text) {
            Some((key, value)) => {
                definitions.insert(key, value);
                false
            }
            None => true,
        }
    });
    definitions
}

/// Splits `[key]: value` into its trimmed key and value. The value stops at any
/// further `]:`.
pub fn parse_definition(text: &str) -> Option<(String, String)> {
    let rest = text.strip_prefix(Link::OPEN)?;
    let mut parts = rest.split(Link::DEFINITION_SEPARATOR);
    let key = parts.next()?;
    let value = parts.next()?;
    Some((key.trim().to_string(), value.trim().to_string()))
}
