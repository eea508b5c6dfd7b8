use std::fmt;

use serde::Serialize;

use crate::parsing::Document;
use crate::parsing::inline::Token;

/// A stable, line-per-entry rendering of a [`Document`].
#[derive(Debug, Serialize)]
pub struct Snap {
    pub front_matter: Vec<String>,
    pub references: Vec<String>,
    pub lines: Vec<String>,
}

pub fn normalize(doc: &Document) -> Snap {
    let pairs = |map: &std::collections::BTreeMap<String, String>| {
        map.iter()
            .map(|(k, v)| format!("{k} = {v:?}"))
            .collect::<Vec<_>>()
    };
    Snap {
        front_matter: pairs(&doc.front_matter),
        references: pairs(&doc.references),
        lines: doc
            .lines
            .iter()
            .map(|l| {
                format!(
                    "{:?} {}: {}",
                    l.line.style,
                    l.line.indent_depth,
                    render_tokens(&l.tokens)
                )
            })
            .collect(),
    }
}

/// `"text"{Style,..}[meta,..]` per token, space separated. Empty sets are omitted.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(render_token).collect::<Vec<_>>().join(" ")
}

pub fn render_token(token: &Token) -> String {
    let mut out = format!("{:?}", token.text);
    if !token.styles.is_empty() {
        let styles: Vec<_> = token.styles.iter().map(|s| format!("{s:?}")).collect();
        out.push_str(&format!("{{{}}}", styles.join(",")));
    }
    if !token.metadata.is_empty() {
        let metadata: Vec<_> = token.metadata.iter().map(|m| format!("{m:?}")).collect();
        out.push_str(&format!("[{}]", metadata.join(",")));
    }
    out
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, entries) in [
            ("front_matter", &self.front_matter),
            ("references", &self.references),
        ] {
            if entries.is_empty() {
                continue;
            }
            writeln!(f, "{title}:")?;
            for entry in entries {
                writeln!(f, "  {entry}")?;
            }
        }
        writeln!(f, "lines:")?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rules::CharacterStyle;

    #[test]
    fn token_rendering_omits_empty_sets() {
        assert_eq!(render_token(&Token::plain("a b")), r#""a b""#);
        let link = Token {
            text: "x".to_string(),
            styles: vec![CharacterStyle::Link, CharacterStyle::Bold],
            metadata: vec!["http://x".to_string()],
        };
        assert_eq!(render_token(&link), r#""x"{Link,Bold}["http://x"]"#);
    }
}
