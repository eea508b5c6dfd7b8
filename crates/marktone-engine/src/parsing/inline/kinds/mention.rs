use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::rules::CharacterStyle;

static LEADING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("valid mention id pattern"));
static BATON_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+:[0-9]+\}").expect("valid baton pattern"));
static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\}").expect("valid user pattern"));

/// Mention spans: `{{{mention:<id>}<name>}}}` and friends.
///
/// The span's content keeps the identifier in front of the display name. After
/// coalescing, [`Mention::rewrite`] moves the identifier into metadata and
/// prefixes the display text with a sigil.
pub struct Mention;

impl Mention {
    pub const OPEN: &'static str = "{{{mention:";
    pub const CLOSE_ALL: &'static str = "}}}";
    pub const CLOSE: &'static str = "}}";
    /// Group names that mention everybody in a scope.
    pub const GROUPS: [&'static str; 2] = ["members", "project"];

    /// Rewrites a mention-styled token in place. Tokens without a mention style are untouched.
    ///
    /// - `42:7}name` becomes `@@name`, styled [`CharacterStyle::Baton`]
    /// - `42}name` becomes `@name`, styled [`CharacterStyle::Mention`]
    /// - `members` becomes `@!members`, styled [`CharacterStyle::MentionAll`]
    ///
    /// A leading numeric id (or the group name) is appended to `metadata`.
    pub fn rewrite(text: &mut String, styles: &mut [CharacterStyle], metadata: &mut Vec<String>) {
        let Some(index) = styles
            .iter()
            .position(|s| matches!(s, CharacterStyle::Mention | CharacterStyle::MentionAll))
        else {
            return;
        };

        if let Some(id) = LEADING_ID.find(text) {
            metadata.push(id.as_str().to_string());
            if let Some(m) = BATON_ID.find(text) {
                let rest = text[m.end()..].to_string();
                *text = format!("@@{rest}");
                styles[index] = CharacterStyle::Baton;
            } else if let Some(m) = USER_ID.find(text) {
                let rest = text[m.end()..].to_string();
                *text = format!("@{rest}");
                styles[index] = CharacterStyle::Mention;
            }
        } else if Self::GROUPS.contains(&text.as_str()) {
            metadata.push(text.clone());
            *text = format!("@!{text}");
            styles[index] = CharacterStyle::MentionAll;
        }
    }
}
