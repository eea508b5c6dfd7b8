/// Highlighted keyword span, `<==term==>`.
pub struct Keyword;

impl Keyword {
    pub const OPEN: &'static str = "<==";
    pub const CLOSE: &'static str = "==>";
}
