/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: once matched, no later rule looks inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
    /// Longest accepted backtick run.
    pub const MAX_RUN: usize = 3;
}
