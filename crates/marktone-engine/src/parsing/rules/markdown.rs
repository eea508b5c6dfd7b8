use serde::{Deserialize, Serialize};

use super::{
    AppliesTo, BlockRule, BlockStyle, CharacterRule, CharacterRuleTag, CharacterStyle,
    FrontMatterRule, RemovalSide, RuleError, RuleSet,
};
use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Keyword, Link, Mention};
use crate::parsing::lines::kinds::{BlockQuote, Heading, HiddenBlock, IndentedCode, ListItem};

/// Switches for each group of the default Markdown rule table.
///
/// Every feature is on by default. Missing keys in a config file keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub lists: bool,
    pub code_blocks: bool,
    pub blockquotes: bool,
    pub headings: bool,
    pub hidden_blocks: bool,
    pub front_matter: bool,
    pub images: bool,
    pub links: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub emphasis: bool,
    pub keywords: bool,
    pub mentions: bool,
    /// Keep blank lines as empty body lines instead of dropping them.
    pub preserve_empty_lines: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            lists: true,
            code_blocks: true,
            blockquotes: true,
            headings: true,
            hidden_blocks: true,
            front_matter: true,
            images: true,
            links: true,
            code: true,
            strikethrough: true,
            emphasis: true,
            keywords: true,
            mentions: true,
            preserve_empty_lines: true,
        }
    }
}

impl RuleSet {
    /// The default Markdown table, restricted to the enabled `features`.
    pub fn markdown(features: &Features) -> Result<Self, RuleError> {
        let mut set = RuleSet::empty();

        if features.front_matter {
            set.front_matter.push(FrontMatterRule::yaml());
        }
        set.block_rules = block_rules(features)?;
        set.character_rules = character_rules(features);
        if features.preserve_empty_lines {
            set.empty_line_style = Some(BlockStyle::Body);
        }
        Ok(set)
    }
}

fn block_rules(features: &Features) -> Result<Vec<BlockRule>, RuleError> {
    let mut rules = vec![];

    if features.lists {
        rules.push(
            BlockRule::finder("bullet", ListItem::bullet_marker, BlockStyle::UnorderedList)
                .untrimmed(),
        );
        rules.push(BlockRule::regex(ListItem::ORDERED_PATTERN, BlockStyle::OrderedList)?.untrimmed());
    }
    if features.code_blocks {
        rules.push(
            BlockRule::literal(IndentedCode::SPACES, BlockStyle::CodeBlock)
                .with_alternates(&[IndentedCode::TAB])?
                .untrimmed(),
        );
    }
    if features.blockquotes {
        rules.push(BlockRule::finder(
            "blockquote",
            BlockQuote::marker,
            BlockStyle::Blockquote,
        ));
    }
    if features.headings {
        for level in (1..=Heading::MAX_LEVEL).rev() {
            rules.push(
                BlockRule::literal(&Heading::token(level), BlockStyle::Heading(level))
                    .removing(RemovalSide::Both),
            );
        }
        rules.push(
            BlockRule::literal(Heading::SETEXT_H1, BlockStyle::Heading(1))
                .removing(RemovalSide::None)
                .applying_to(AppliesTo::Previous),
        );
        rules.push(
            BlockRule::literal(Heading::SETEXT_H2, BlockStyle::Heading(2))
                .removing(RemovalSide::None)
                .applying_to(AppliesTo::Previous),
        );
    }
    if features.hidden_blocks {
        rules.push(
            BlockRule::literal(HiddenBlock::DELIMITER, BlockStyle::Body)
                .applying_to(AppliesTo::UntilClose),
        );
    }
    Ok(rules)
}

fn character_rules(features: &Features) -> Vec<CharacterRule> {
    let mut rules = vec![];

    if features.images {
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Link::IMAGE_OPEN),
                vec![
                    CharacterRuleTag::close(Link::CLOSE),
                    CharacterRuleTag::metadata_open(Link::REFERENCE_OPEN),
                    CharacterRuleTag::metadata_close(Link::REFERENCE_CLOSE),
                ],
            )
            .with_style(1, CharacterStyle::Image)
            .metadata_lookup()
            .boundary(),
        );
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Link::IMAGE_OPEN),
                vec![
                    CharacterRuleTag::close(Link::CLOSE),
                    CharacterRuleTag::metadata_open(Link::URL_OPEN),
                    CharacterRuleTag::metadata_close(Link::URL_CLOSE),
                ],
            )
            .with_style(1, CharacterStyle::Image)
            .boundary(),
        );
    }
    if features.links {
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Link::OPEN),
                vec![
                    CharacterRuleTag::close(Link::CLOSE),
                    CharacterRuleTag::metadata_open(Link::REFERENCE_OPEN),
                    CharacterRuleTag::metadata_close(Link::REFERENCE_CLOSE),
                ],
            )
            .with_style(1, CharacterStyle::Link)
            .metadata_lookup()
            .boundary(),
        );
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Link::OPEN),
                vec![
                    CharacterRuleTag::close(Link::CLOSE),
                    CharacterRuleTag::metadata_open(Link::URL_OPEN),
                    CharacterRuleTag::metadata_close(Link::URL_CLOSE),
                ],
            )
            .with_style(1, CharacterStyle::Link)
            .boundary(),
        );
    }
    if features.code {
        rules.push(
            CharacterRule::new(CharacterRuleTag::repeating(CodeSpan::TICK), vec![])
                .with_style(1, CharacterStyle::Code)
                .with_repeat(1, CodeSpan::MAX_RUN)
                .balanced()
                .cancels_remaining(),
        );
    }
    if features.strikethrough {
        rules.push(
            CharacterRule::new(CharacterRuleTag::repeating(Emphasis::TILDE), vec![])
                .with_style(1, CharacterStyle::Strikethrough)
                .with_repeat(1, 2)
                .balanced()
                .cancels_remaining(),
        );
    }
    if features.emphasis {
        for tag in [Emphasis::STAR, Emphasis::UNDERSCORE] {
            rules.push(
                CharacterRule::new(CharacterRuleTag::repeating(tag), vec![])
                    .with_style(1, CharacterStyle::Italic)
                    .with_style(2, CharacterStyle::Bold)
                    .with_repeat(1, Emphasis::MAX_RUN)
                    .balanced(),
            );
        }
    }
    if features.keywords {
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Keyword::OPEN),
                vec![CharacterRuleTag::close(Keyword::CLOSE)],
            )
            .with_style(1, CharacterStyle::Keyword),
        );
    }
    if features.mentions {
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Mention::OPEN),
                vec![CharacterRuleTag::close(Mention::CLOSE_ALL)],
            )
            .with_style(1, CharacterStyle::MentionAll),
        );
        rules.push(
            CharacterRule::new(
                CharacterRuleTag::open(Mention::OPEN),
                vec![CharacterRuleTag::close(Mention::CLOSE)],
            )
            .with_style(1, CharacterStyle::Mention),
        );
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_table_has_every_group() {
        let set = RuleSet::markdown(&Features::default()).unwrap();
        assert_eq!(set.front_matter, vec![FrontMatterRule::yaml()]);
        // bullet, ordered, code, quote, six headings, two setext, hidden
        assert_eq!(set.block_rules.len(), 13);
        assert_eq!(set.character_rules.len(), 11);
        assert_eq!(set.empty_line_style, Some(BlockStyle::Body));
    }

    #[test]
    fn deeper_headings_are_tried_first() {
        let set = RuleSet::markdown(&Features::default()).unwrap();
        let headings: Vec<_> = set
            .block_rules
            .iter()
            .filter(|r| r.applies_to == AppliesTo::Current)
            .filter_map(|r| match r.style {
                BlockStyle::Heading(level) => Some(level),
                _ => None,
            })
            .collect();
        assert_eq!(headings, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn disabled_features_leave_their_rules_out() {
        let features = Features {
            emphasis: false,
            mentions: false,
            lists: false,
            preserve_empty_lines: false,
            ..Features::default()
        };
        let set = RuleSet::markdown(&features).unwrap();
        assert!(set.block_rules.iter().all(|r| !r.style.is_list()));
        assert!(
            set.character_rules
                .iter()
                .all(|r| r.primary_tag.text != Emphasis::STAR && r.primary_tag.text != Mention::OPEN)
        );
        assert_eq!(set.empty_line_style, None);
    }

    #[test]
    fn code_spans_come_before_emphasis() {
        let set = RuleSet::markdown(&Features::default()).unwrap();
        let position = |tag: &str| {
            set.character_rules
                .iter()
                .position(|r| r.primary_tag.text == tag)
                .unwrap()
        };
        assert!(position(CodeSpan::TICK) < position(Emphasis::STAR));
        assert!(position(Link::IMAGE_OPEN) < position(Link::OPEN));
    }
}
