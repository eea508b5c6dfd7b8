/// Indented code line type.
pub struct IndentedCode;

impl IndentedCode {
    pub const SPACES: &'static str = "    ";
    pub const TAB: &'static str = "\t";
}
