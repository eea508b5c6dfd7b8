/// Heading line type: ATX markers and setext underlines.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;
    /// Underline turning the previous line into a level 1 heading.
    pub const SETEXT_H1: &'static str = "=";
    /// Underline turning the previous line into a level 2 heading.
    pub const SETEXT_H2: &'static str = "-";

    /// The opening token for `level`, e.g. `"### "` for 3.
    pub fn token(level: u8) -> String {
        format!("{} ", Self::MARKER.to_string().repeat(usize::from(level)))
    }
}
