use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Inline style carried by tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CharacterStyle {
    Bold,
    Italic,
    Code,
    Link,
    Image,
    Strikethrough,
    Keyword,
    /// A mention of a single user, `{{{mention:42}name}}`.
    Mention,
    /// A mention of a group (`members`, `project`) or an unresolved mention span.
    MentionAll,
    /// A mention carrying a `user:task` identifier pair.
    Baton,
}

/// What part a tag plays in a character rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    Open,
    Close,
    MetadataOpen,
    MetadataClose,
    /// Symmetric delimiter whose run length selects the style (`*`, `**`).
    Repeating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRuleTag {
    pub text: String,
    pub role: TagRole,
}

impl CharacterRuleTag {
    pub fn new(text: &str, role: TagRole) -> Self {
        Self {
            text: text.to_string(),
            role,
        }
    }

    pub fn open(text: &str) -> Self {
        Self::new(text, TagRole::Open)
    }

    pub fn close(text: &str) -> Self {
        Self::new(text, TagRole::Close)
    }

    pub fn metadata_open(text: &str) -> Self {
        Self::new(text, TagRole::MetadataOpen)
    }

    pub fn metadata_close(text: &str) -> Self {
        Self::new(text, TagRole::MetadataClose)
    }

    pub fn repeating(text: &str) -> Self {
        Self::new(text, TagRole::Repeating)
    }
}

/// A declarative inline span matcher.
///
/// Built with chained setters:
///
/// ```ignore
/// CharacterRule::new(CharacterRuleTag::repeating("*"), vec![])
///     .with_style(1, CharacterStyle::Italic)
///     .with_style(2, CharacterStyle::Bold)
///     .with_repeat(1, 3)
///     .balanced();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRule {
    pub primary_tag: CharacterRuleTag,
    pub auxiliary_tags: Vec<CharacterRuleTag>,
    pub escape_characters: Vec<char>,
    /// Group 1 is the enclosed content of open/close rules; for repeating rules the
    /// group index is the delimiter run length.
    pub styles: BTreeMap<usize, CharacterStyle>,
    min_repeat: usize,
    max_repeat: usize,
    /// Metadata text is a key into the document's lookup table rather than the value.
    pub uses_metadata_lookup: bool,
    /// Matched spans cannot be opened into or closed out of by other matches.
    pub defines_boundary: bool,
    /// Matched spans are excluded from every later rule.
    pub cancels_remaining_rules: bool,
    /// Tag occurrences on a line must pair up, or the rule does not fire on that line.
    pub requires_balanced_tag_count: bool,
    /// Repeating tags must open after whitespace and close before it.
    pub requires_surrounding_space: bool,
}

impl CharacterRule {
    pub const DEFAULT_ESCAPE: char = '\\';

    pub fn new(primary_tag: CharacterRuleTag, auxiliary_tags: Vec<CharacterRuleTag>) -> Self {
        Self {
            primary_tag,
            auxiliary_tags,
            escape_characters: vec![Self::DEFAULT_ESCAPE],
            styles: BTreeMap::new(),
            min_repeat: 1,
            max_repeat: 1,
            uses_metadata_lookup: false,
            defines_boundary: false,
            cancels_remaining_rules: false,
            requires_balanced_tag_count: false,
            requires_surrounding_space: false,
        }
    }

    pub fn with_style(mut self, group: usize, style: CharacterStyle) -> Self {
        self.styles.insert(group, style);
        self
    }

    /// Sets the accepted run lengths. Inverted bounds are swapped; zero counts as one.
    pub fn with_repeat(mut self, min: usize, max: usize) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.min_repeat = min.max(1);
        self.max_repeat = max.max(1);
        self
    }

    pub fn with_escapes(mut self, escapes: &[char]) -> Self {
        self.escape_characters = escapes.to_vec();
        self
    }

    pub fn metadata_lookup(mut self) -> Self {
        self.uses_metadata_lookup = true;
        self
    }

    pub fn boundary(mut self) -> Self {
        self.defines_boundary = true;
        self
    }

    pub fn cancels_remaining(mut self) -> Self {
        self.cancels_remaining_rules = true;
        self
    }

    pub fn balanced(mut self) -> Self {
        self.requires_balanced_tag_count = true;
        self
    }

    pub fn surrounding_space(mut self) -> Self {
        self.requires_surrounding_space = true;
        self
    }

    pub fn min_repeat(&self) -> usize {
        self.min_repeat
    }

    pub fn max_repeat(&self) -> usize {
        self.max_repeat
    }

    pub fn is_repeating(&self) -> bool {
        self.primary_tag.role == TagRole::Repeating
    }

    /// The first auxiliary tag with the given role.
    pub fn tag(&self, role: TagRole) -> Option<&CharacterRuleTag> {
        self.auxiliary_tags.iter().find(|t| t.role == role)
    }

    /// Candidate opening tags: the primary tag, then auxiliary tags with the open role.
    pub fn open_tags(&self) -> impl Iterator<Item = &CharacterRuleTag> {
        std::iter::once(&self.primary_tag)
            .chain(&self.auxiliary_tags)
            .filter(|t| t.role == TagRole::Open)
    }

    /// Styles applied to a group. A group with no entry of its own takes every style
    /// registered for a lower group, so a `***` run is both italic and bold.
    pub fn styles_for_group(&self, group: usize) -> Vec<CharacterStyle> {
        if let Some(style) = self.styles.get(&group) {
            return vec![*style];
        }
        self.styles.range(..group).map(|(_, s)| *s).collect()
    }

    /// Whether `escape` placed before a character starting `c` escapes one of this rule's tags.
    pub fn escapes(&self, escape: char, c: char) -> bool {
        self.escape_characters.contains(&escape)
            && std::iter::once(&self.primary_tag)
                .chain(&self.auxiliary_tags)
                .any(|t| t.text.starts_with(c))
    }
}

impl fmt::Display for CharacterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule `{}`", self.primary_tag.text)?;
        if let Some(close) = self.tag(TagRole::Close) {
            write!(f, "..`{}`", close.text)?;
        }
        if let (Some(open), Some(close)) = (
            self.tag(TagRole::MetadataOpen),
            self.tag(TagRole::MetadataClose),
        ) {
            write!(f, " `{}`meta`{}`", open.text, close.text)?;
        }
        write!(f, " styles {:?}", self.styles)
    }
}
