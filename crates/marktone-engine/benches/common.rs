// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](https://example.com).\n\n- Bullet point\n  - Nested item with `code`\n- Another item\n  wrapped onto a second line\n\n    fn example() {}\n\n> Quoted ~~text~~ with {{{mention:42}alice}}}\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn front_matter() -> &'static str {
    "---\ntitle: Benchmark\nauthor: bench\n---\n"
}
