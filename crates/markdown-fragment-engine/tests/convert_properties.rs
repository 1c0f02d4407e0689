//! End-to-end behaviour of `convert_markdown_to_html` and `convert_with`.

use markdown_fragment_engine::{Options, convert_markdown_to_html, convert_with, escape};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("Hello world")]
#[case("  padded on both sides  ")]
#[case("Fish & chips < 5 > 3")]
#[case("Trailing pipe-free prose, with punctuation!")]
fn plain_text_is_one_escaped_paragraph(#[case] source: &str) {
    assert_eq!(
        convert_markdown_to_html(source),
        format!("<p>{}</p>", escape(source.trim()))
    );
}

#[rstest]
#[case("# X", "<h1>X</h1>")]
#[case("## X", "<h2>X</h2>")]
#[case("###### X", "<h6>X</h6>")]
#[case("######### X", "<h6>X</h6>")]
#[case("#X", "<p>#X</p>")]
fn heading_levels_clamp_to_six(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(convert_markdown_to_html(source), expected);
}

#[test]
fn adjacent_bullets_form_one_list() {
    assert_eq!(
        convert_markdown_to_html("- a\n- b\n- c"),
        "<ul><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        convert_markdown_to_html("- a\n- b\n\n* c"),
        "<ul><li>a</li><li>b</li></ul><ul><li>c</li></ul>"
    );
}

#[test]
fn list_closes_before_following_paragraph() {
    assert_eq!(
        convert_markdown_to_html("- a\ntext"),
        "<ul><li>a</li></ul><p>text</p>"
    );
}

#[test]
fn list_open_at_end_of_input_is_closed() {
    let html = convert_markdown_to_html("intro\n+ last");
    assert!(html.ends_with("<ul><li>last</li></ul>"));
}

#[test]
fn table_with_divider_has_header() {
    assert_eq!(
        convert_markdown_to_html("a | b\n---|---\n1 | 2"),
        "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn table_without_divider_is_all_body_rows() {
    assert_eq!(
        convert_markdown_to_html("a | b\n1 | 2"),
        "<table><tbody><tr><td>a</td><td>b</td></tr>\
         <tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn single_pipe_line_stays_a_paragraph() {
    assert_eq!(
        convert_markdown_to_html("either | or"),
        "<p>either | or</p>"
    );
}

#[test]
fn html_block_passes_through_until_blank_line() {
    let source = "<div class=\"note\">\n<strong>raw</strong> & unescaped\n</div>\n\nAfter & more";
    assert_eq!(
        convert_markdown_to_html(source),
        "<div class=\"note\">\n<strong>raw</strong> & unescaped\n</div>\n<p>After &amp; more</p>"
    );
}

#[test]
fn html_block_runs_to_end_of_input() {
    assert_eq!(
        convert_markdown_to_html("<section>\n# not a heading"),
        "<section>\n# not a heading"
    );
}

#[test]
fn inline_tag_mid_line_is_escaped_prose() {
    assert_eq!(
        convert_markdown_to_html("Use <b>raw</b> html"),
        "<p>Use &lt;b&gt;raw&lt;/b&gt; html</p>"
    );
}

#[rstest]
#[case("just words")]
#[case("numbers 1 2 3 and quotes \"x\"")]
fn escape_is_idempotent_on_safe_text(#[case] text: &str) {
    assert_eq!(escape(text), text);
    assert_eq!(escape(&escape(text)), escape(text));
}

#[test]
fn image_attributes_equal_captured_groups() {
    assert_eq!(
        convert_markdown_to_html("![alt text](http://x/y.png)"),
        "<p><img src=\"http://x/y.png\" alt=\"alt text\"></p>"
    );
}

#[test]
fn image_alt_quotes_are_neutralized() {
    assert_eq!(
        convert_markdown_to_html(r#"![a "b" c](p.png)"#),
        "<p><img src=\"p.png\" alt=\"a &quot;b&quot; c\"></p>"
    );
}

#[rstest]
#[case("**bold without close", "<p>**bold without close</p>")]
#[case("[label](open", "<p>[label](open</p>")]
#[case("a `tick", "<p>a `tick</p>")]
fn malformed_inline_syntax_is_literal(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(convert_markdown_to_html(source), expected);
}

#[test]
fn empty_input_is_empty_fragment() {
    assert_eq!(convert_markdown_to_html(""), "");
    assert_eq!(convert_markdown_to_html("\n\r\n  \n"), "");
}

#[test]
fn crlf_and_lf_render_alike() {
    assert_eq!(
        convert_markdown_to_html("# T\r\n- a\r\n- b\r\n"),
        convert_markdown_to_html("# T\n- a\n- b\n")
    );
}

#[test]
fn disabling_tables_renders_rows_as_paragraphs() {
    let options = Options {
        tables: false,
        ..Options::default()
    };
    assert_eq!(
        convert_with("a | b\n1 | 2", options),
        "<p>a | b</p><p>1 | 2</p>"
    );
}

#[test]
fn disabling_raw_html_escapes_tags() {
    let options = Options {
        raw_html: false,
        ..Options::default()
    };
    assert_eq!(
        convert_with("<div>x</div>", options),
        "<p>&lt;div&gt;x&lt;/div&gt;</p>"
    );
}

#[test]
fn disabling_images_leaves_link_around_bang() {
    assert_eq!(
        convert_with("![alt](a.png)", Options::BASIC),
        "<p>!<a href=\"a.png\" target=\"_blank\" rel=\"noopener\">alt</a></p>"
    );
}

#[test]
fn conversion_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || convert_markdown_to_html(&format!("# Post {i}"))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<h1>Post {i}</h1>"));
    }
}

#[test]
fn long_pasted_line_converts_in_bounded_time() {
    let line = "[ ** ![ _ ` *".repeat(1_600);
    let started = std::time::Instant::now();

    let html = convert_markdown_to_html(&line);

    assert!(html.starts_with("<p>") && html.ends_with("</p>"));
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}
