// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point with `code`\n- Another *item*\n\n| Name | Value |\n| --- | --- |\n| a | 1 |\n| b | 2 |\n\n<div class=\"note\">\nraw block\n</div>\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "Text with **strong _and em_**, `a < b`, ![img](i.png) and [a **link**](u) "
        .repeat(repeats)
}
