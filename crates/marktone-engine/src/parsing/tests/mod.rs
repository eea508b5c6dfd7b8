//! End-to-end tests for `MarkdownProcessor` with the default Markdown rules.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::inline::Token;
use crate::parsing::rules::{BlockStyle, CharacterStyle, Features, RuleSet};
use crate::parsing::snapshot::{invariants, render_tokens};
use crate::parsing::{Document, MarkdownProcessor};

fn process(text: &str) -> Document {
    let rules = RuleSet::markdown(&Features::default()).unwrap();
    let doc = MarkdownProcessor::new(rules).process(text);
    invariants(&doc);
    doc
}

/// One `style depth: tokens` string per line.
fn render(doc: &Document) -> Vec<String> {
    doc.lines
        .iter()
        .map(|l| {
            format!(
                "{:?} {}: {}",
                l.line.style,
                l.line.indent_depth,
                render_tokens(&l.tokens)
            )
        })
        .collect()
}

fn tokens_of(text: &str) -> Vec<Token> {
    let doc = process(text);
    assert_eq!(doc.lines.len(), 1, "expected one line for {text:?}");
    doc.lines[0].tokens.clone()
}

#[rstest]
#[case("plain words here")]
#[case("   padded line   ")]
#[case("a * b")]
#[case("mail me at someone@example.com")]
fn unmatched_line_is_one_trimmed_token(#[case] text: &str) {
    assert_eq!(tokens_of(text), vec![Token::plain(text.trim())]);
}

#[test]
fn balanced_emphasis() {
    assert_eq!(
        render_tokens(&tokens_of("a *b* c")),
        r#""a " "b"{Italic} " c""#
    );
}

#[test]
fn unbalanced_emphasis_is_literal() {
    assert_eq!(tokens_of("a *b c"), vec![Token::plain("a *b c")]);
}

#[test]
fn escape_suppression() {
    assert_eq!(tokens_of(r"\*not italic\*"), vec![Token::plain("*not italic*")]);
}

#[test]
fn link_extraction() {
    let tokens = tokens_of("[text](http://x)");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "text");
    assert_eq!(tokens[0].styles, vec![CharacterStyle::Link]);
    assert_eq!(tokens[0].metadata, vec!["http://x".to_string()]);
}

#[test]
fn front_matter_is_split_off() {
    let doc = process("---\na: 1\nb: 2\n---\nBody");
    assert_eq!(
        doc.front_matter,
        BTreeMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string())
        ])
    );
    assert_eq!(render(&doc), vec![r#"Body 0: "Body""#]);
    assert_eq!(doc.front_matter("a"), Some("1"));
}

#[test]
fn nested_list_indentation() {
    let doc = process("- a\n  - b\n    - c\n  - d");
    let depths: Vec<_> = doc.lines.iter().map(|l| l.line.indent_depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 1]);
    assert!(doc.lines.iter().all(|l| l.line.style == BlockStyle::UnorderedList));
}

#[test]
fn code_span_cancels_emphasis() {
    assert_eq!(
        render_tokens(&tokens_of("`*a*`")),
        r#""*a*"{Code}"#
    );
}

#[test]
fn empty_input_is_empty() {
    let doc = process("");
    assert!(doc.is_empty());
    assert!(doc.front_matter.is_empty());
}

#[test]
fn blank_only_input_keeps_blank_lines() {
    let doc = process("\n\n");
    assert_eq!(render(&doc), vec![r#"Body 0: """#, r#"Body 0: """#]);
}

#[test]
fn code_blocks_are_not_tokenised() {
    let doc = process("    *not* [a](b)");
    assert_eq!(render(&doc), vec![r#"CodeBlock 0: "*not* [a](b)""#]);
}

#[test]
fn wrapped_list_item_keeps_styles_across_the_join() {
    let doc = process("- first *half\n  second* half");
    assert_eq!(
        render(&doc),
        vec![r#"UnorderedList 0: "first " "half\nsecond"{Italic} " half""#]
    );
}

#[test]
fn headings_are_tokenised() {
    let doc = process("## A **bold** title ##");
    assert_eq!(
        render(&doc),
        vec![r#"Heading(2) 0: "A " "bold"{Bold} " title""#]
    );
}

#[test]
fn reference_definitions_feed_links() {
    let doc = process("See [the docs][docs].\n\n[docs]: https://example.com/docs");
    assert_eq!(
        render(&doc),
        vec![
            r#"Body 0: "See " "the docs"{Link}["https://example.com/docs"] ".""#,
            r#"Body 0: """#,
        ]
    );
    assert_eq!(
        doc.references.get("docs").map(String::as_str),
        Some("https://example.com/docs")
    );
}

#[test]
fn document_references_override_caller_lookup() {
    let rules = RuleSet::markdown(&Features::default()).unwrap();
    let processor = MarkdownProcessor::new(rules).with_metadata_lookup(BTreeMap::from([
        ("a".to_string(), "from-caller".to_string()),
        ("b".to_string(), "caller-only".to_string()),
    ]));
    let doc = processor.process("[x][a] [y][b]\n[a]: from-document");
    assert_eq!(
        render(&doc),
        vec![r#"Body 0: "x"{Link}["from-document"] " " "y"{Link}["caller-only"]"#]
    );
}

#[test]
fn link_label_shields_emphasis_markers() {
    assert_eq!(
        render_tokens(&tokens_of("[a *b](x) c*")),
        r#""a *b"{Link}["x"] " c*""#
    );
}

#[test]
fn emphasis_inside_link_label() {
    assert_eq!(
        render_tokens(&tokens_of("[**go**](x)")),
        r#""go"{Link,Bold}["x"]"#
    );
}

#[test]
fn disabled_feature_leaves_text_alone() {
    let features = Features {
        emphasis: false,
        ..Features::default()
    };
    let doc = MarkdownProcessor::new(RuleSet::markdown(&features).unwrap()).process("*a*");
    assert_eq!(doc.lines[0].tokens, vec![Token::plain("*a*")]);
}

#[test]
fn empty_rule_set_passes_text_through() {
    let doc = MarkdownProcessor::new(RuleSet::empty()).process("# *x*\n\n- y");
    assert_eq!(
        render(&doc),
        vec![r##"Body 0: "# *x*""##, r#"Body 0: "- y""#]
    );
}

#[test]
fn processor_is_reusable() {
    let rules = RuleSet::markdown(&Features::default()).unwrap();
    let processor = MarkdownProcessor::new(rules);
    let first = processor.process("%%\nnever closed\n---");
    assert!(first.is_empty());
    let second = processor.process("shown");
    assert_eq!(render(&second), vec![r#"Body 0: "shown""#]);
}

#[test]
fn processor_is_shareable_across_threads() {
    let rules = RuleSet::markdown(&Features::default()).unwrap();
    let processor = std::sync::Arc::new(MarkdownProcessor::new(rules));
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let processor = processor.clone();
            std::thread::spawn(move || processor.process(&format!("**{n}**")))
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let doc = handle.join().unwrap();
        assert_eq!(render(&doc), vec![format!(r#"Body 0: "{n}"{{Bold}}"#)]);
    }
}
