use std::ops::Range;

/// Blockquote line type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Block rule finder: the full run of quote prefixes, if any.
    pub fn marker(line: &str) -> Option<Range<usize>> {
        match Self::strip_prefixes(line) {
            (0, _) => None,
            (_, end) => Some(0..end),
        }
    }

    /// Nesting depth encoded in a captured prefix.
    pub fn depth(prefix: &str) -> u8 {
        Self::strip_prefixes(prefix).0
    }
}
