use std::ops::Range;

/// List item line type: markers and indentation measurement.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// Indented ordered marker, `1. ` or `1) `.
    pub const ORDERED_PATTERN: &'static str = r"\s*\d+[.)]\s";
    /// Width a tab counts for when comparing indentation.
    pub const TAB_WIDTH: usize = 3;

    /// Finder for bullet markers: optional indentation, one bullet, one whitespace character.
    pub fn bullet_marker(line: &str) -> Option<Range<usize>> {
        let indent = line.len() - line.trim_start().len();
        let mut rest = line[indent..].chars();
        let bullet = rest.next().filter(|c| Self::BULLETS.contains(c))?;
        let space = rest.next().filter(|c| c.is_whitespace())?;
        Some(0..indent + bullet.len_utf8() + space.len_utf8())
    }

    /// Indentation of a captured marker: space = 1, tab = [`Self::TAB_WIDTH`].
    pub fn leading_space_width(prefix: &str) -> usize {
        prefix
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum()
    }
}
