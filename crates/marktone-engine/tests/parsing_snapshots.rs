use marktone_engine::parsing::{MarkdownProcessor, rules::RuleSet, snapshot};
use marktone_engine::{BlockStyle, CharacterStyle, Features};

#[test]
fn fixture_inline_styles() {
    assert_fixture("inline_styles");
}

#[test]
fn fixture_blocks() {
    assert_fixture("blocks");
}

#[test]
fn fixture_front_matter() {
    assert_fixture("front_matter");
}

fn processor() -> MarkdownProcessor {
    MarkdownProcessor::new(RuleSet::markdown(&Features::default()).unwrap())
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = processor().process(&md);
    snapshot::invariants(&doc);

    let snap = snapshot::normalize(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap.to_string());
    });
}

/// Windows line endings classify the same as Unix ones.
#[test]
fn crlf_input_matches_lf_input() {
    let lf = processor().process("# Title\n\n- *a*\n- b\n");
    let crlf = processor().process("# Title\r\n\r\n- *a*\r\n- b\r\n");
    assert_eq!(lf, crlf);
}

/// Code blocks and code spans are raw zones: nothing inside is styled.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let doc = processor().process("    `[x](y)` **z**\n`**z** _w_`");
    assert_eq!(doc.lines.len(), 2);
    assert_eq!(doc.lines[0].line.style, BlockStyle::CodeBlock);
    assert!(doc.lines[0].tokens[0].styles.is_empty());

    let span = &doc.lines[1].tokens;
    assert_eq!(span.len(), 1);
    assert_eq!(span[0].text, "**z** _w_");
    assert_eq!(span[0].styles, vec![CharacterStyle::Code]);
}

/// Malformed input never panics and always yields tokens for every line.
#[test]
fn malformed_input_fails_open() {
    let inputs = [
        "---",
        "---\nkey: value",
        "[unclosed link](",
        "![](",
        "**bold *mixed** up*",
        "\\\\\\",
        "```\n``\n`",
        "%%",
        "=\n-",
        "{{{mention:",
        "- \n  -\n    - ",
        "\t\t\t",
    ];
    for input in inputs {
        let doc = processor().process(input);
        snapshot::invariants(&doc);
    }
}
