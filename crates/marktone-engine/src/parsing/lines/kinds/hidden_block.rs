/// Region delimited by lines equal to `%%`; everything inside is dropped.
pub struct HiddenBlock;

impl HiddenBlock {
    pub const DELIMITER: &'static str = "%%";
}
