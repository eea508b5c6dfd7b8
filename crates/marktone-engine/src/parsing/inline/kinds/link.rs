/// Link and image tags.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const IMAGE_OPEN: &'static str = "![";
    pub const CLOSE: &'static str = "]";
    pub const URL_OPEN: &'static str = "(";
    pub const URL_CLOSE: &'static str = ")";
    pub const REFERENCE_OPEN: &'static str = "[";
    pub const REFERENCE_CLOSE: &'static str = "]";
    /// Separator of a `[key]: value` reference definition.
    pub const DEFINITION_SEPARATOR: &'static str = "]:";
}
