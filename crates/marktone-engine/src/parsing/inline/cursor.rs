use super::element::Element;

/// A read-only position over a line's elements.
///
/// Tags only ever match available elements (see [`Element::is_available`]), so
/// claimed, escaped and already-tagged characters are invisible here.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The elements being scanned.
    pub elements: &'a [Element],
    /// Current index into `elements`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at index `i`.
    pub fn new(elements: &'a [Element], i: usize) -> Self {
        Self { elements, i }
    }

    /// Returns the current index.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if past the last element.
    pub fn eof(&self) -> bool {
        self.i >= self.elements.len()
    }

    /// Peeks at the current element without advancing.
    pub fn peek(&self) -> Option<&'a Element> {
        self.elements.get(self.i)
    }

    /// Match-at-anchor: whether the available elements from here spell `tag`.
    pub fn starts_with(&self, tag: &str) -> bool {
        if tag.is_empty() {
            return false;
        }
        let mut rest = self.elements.get(self.i..).unwrap_or_default().iter();
        tag.chars().all(|c| {
            rest.next()
                .is_some_and(|e| e.is_available() && e.character == c)
        })
    }

    /// Count-run: how many back-to-back copies of `tag` start here.
    pub fn run_length(&self, tag: &str) -> usize {
        let width = tag.chars().count();
        let mut probe = self.clone();
        let mut count = 0;
        while probe.starts_with(tag) {
            count += 1;
            probe.bump_n(width);
        }
        count
    }

    /// Advances by one element, returning the consumed element.
    pub fn bump(&mut self) -> Option<&'a Element> {
        let e = self.elements.get(self.i)?;
        self.i += 1;
        Some(e)
    }

    /// Advances by `n` elements.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::element::Category;

    #[test]
    fn cursor_basics() {
        let elements = Element::from_text("hello");
        let mut cur = Cursor::new(&elements, 0);
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek().map(|e| e.character), Some('h'));
        assert_eq!(cur.bump().map(|e| e.character), Some('h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let elements = Element::from_text("[[link]]");
        let cur = Cursor::new(&elements, 0);
        assert!(cur.starts_with("[["));
        assert!(!cur.starts_with("]]"));
        assert!(!cur.starts_with(""));
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let elements = Element::from_text("ab");
        let mut cur = Cursor::new(&elements, 0);
        assert!(!cur.starts_with("abcdef"));
        cur.bump();
        assert!(!cur.starts_with("bc"));
        assert!(cur.starts_with("b"));
    }

    #[test]
    fn starts_with_skips_unavailable_elements() {
        let mut elements = Element::from_text("**");
        elements[1].category = Category::Tag;
        assert!(!Cursor::new(&elements, 0).starts_with("**"));
        assert!(Cursor::new(&elements, 0).starts_with("*"));
    }

    #[test]
    fn run_length_counts_whole_tags() {
        let elements = Element::from_text("***a");
        assert_eq!(Cursor::new(&elements, 0).run_length("*"), 3);
        assert_eq!(Cursor::new(&elements, 0).run_length("**"), 1);
        assert_eq!(Cursor::new(&elements, 3).run_length("*"), 0);
    }

    #[test]
    fn run_length_stops_at_escaped_element() {
        let mut elements = Element::from_text("***");
        elements[2].escaped = true;
        assert_eq!(Cursor::new(&elements, 0).run_length("*"), 2);
    }

    #[test]
    fn bump_n_past_end() {
        let elements = Element::from_text("hi");
        let mut cur = Cursor::new(&elements, 0);
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(cur.peek().is_none());
        assert!(!cur.starts_with("h"));
        assert!(cur.bump().is_none());
    }
}
