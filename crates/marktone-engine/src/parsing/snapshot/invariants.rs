use crate::parsing::Document;

/// Structural checks every processed document must pass.
pub fn check(doc: &Document) {
    // Position of the current line within its run of consecutive list lines.
    let mut run_position = 0;
    for (n, styled) in doc.lines.iter().enumerate() {
        let line = &styled.line;
        assert!(!styled.tokens.is_empty(), "line {n} has no tokens: {line:?}");

        if line.style.is_list() {
            assert!(
                line.indent_depth <= run_position,
                "line {n} is nested {} deep after only {run_position} list line(s)",
                line.indent_depth
            );
            run_position += 1;
        } else {
            assert_eq!(line.indent_depth, 0, "non-list line {n} is indented");
            assert_eq!(line.leading_space_width, 0, "non-list line {n} has a marker width");
            run_position = 0;
        }

        if !line.style.should_tokenise() {
            assert_eq!(styled.tokens.len(), 1, "raw line {n} was split");
            assert!(styled.tokens[0].styles.is_empty(), "raw line {n} was styled");
        }

        if styled.tokens.len() > 1 {
            assert!(
                styled.tokens.iter().all(|t| !t.text.is_empty()),
                "line {n} has an empty token among others"
            );
        }
    }
}
