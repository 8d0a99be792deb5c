//! Markdown rendering for reading text.
//!
//! Oracle prose uses headings, `**bold**`, `*italic*`, and blank-line
//! paragraphs. Single line breaks inside a paragraph are kept as `<br />`.
//! Raw HTML in the prose is escaped, never passed through.

use pulldown_cmark::{Event, Options, Parser, html};

/// Renders reading markdown to an HTML fragment.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(markdown, Options::empty()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings() {
        assert_eq!(render_html("# Overview"), "<h1>Overview</h1>\n");
        assert_eq!(render_html("## The Past"), "<h2>The Past</h2>\n");
        assert_eq!(render_html("### Summary"), "<h3>Summary</h3>\n");
    }

    #[test]
    fn test_render_bold_and_italic() {
        let html = render_html("The **Tower** speaks of *sudden* change.");

        assert_eq!(
            html,
            "<p>The <strong>Tower</strong> speaks of <em>sudden</em> change.</p>\n"
        );
    }

    #[test]
    fn test_blank_lines_separate_paragraphs() {
        let html = render_html("First thought.\n\nSecond thought.");

        assert_eq!(html, "<p>First thought.</p>\n<p>Second thought.</p>\n");
    }

    #[test]
    fn test_single_newline_becomes_line_break() {
        let html = render_html("line one\nline two");

        assert_eq!(html, "<p>line one<br />\nline two</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_html("Beware <script>alert(1)</script> omens.");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_html(""), "");
        assert_eq!(render_html("  \n\n "), "");
    }
}
