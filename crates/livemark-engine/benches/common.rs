// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point with [a link](https://example.com)\n- Another item\n\n1. First\n2. Second\n\n> A quote\n\n---\n\n```javascript\nfunction example(n) {\n    return n * 2; // double\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_code_heavy_content(blocks: usize) -> String {
    let mut content = String::new();

    for i in 0..blocks {
        content.push_str(&format!("## Snippet {i}\n\n```python\n"));
        for line in 0..20 {
            content.push_str(&format!(
                "def f{line}(x):\n    return x + {line}.5  # step {line}\n"
            ));
        }
        content.push_str("```\n\n");
    }

    content
}
