/// Symmetric emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";
    pub const TILDE: &'static str = "~";
    /// `***` is the longest emphasis run (bold italic).
    pub const MAX_RUN: usize = 3;
}
