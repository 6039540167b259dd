//! Reader view: the Markdown article converted to plain HTML.
//!
//! No utility classes or scripts, just a small embedded stylesheet. The YAML
//! frontmatter is parsed as a metadata block and dropped from the output.

use askama::Template;
use pulldown_cmark::{html, Options, Parser};

use crate::error::Result;

/// Convert Markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, parser);
    body
}

/// Render a standalone reader document around the converted Markdown.
pub fn render_reader(title: &str, markdown: &str) -> Result<String> {
    let body = markdown_to_html(markdown);
    Ok(ReaderTemplate { title, body: &body }.render()?)
}

#[derive(Template)]
#[template(path = "pages/reader.html")]
struct ReaderTemplate<'a> {
    title: &'a str,
    body: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_dropped() {
        let html = markdown_to_html("---\ntitle: \"Sadhaka\"\n---\n\n# Sadhaka\n");
        assert!(!html.contains("title:"));
        assert!(html.contains("<h1>Sadhaka</h1>"));
    }

    #[test]
    fn test_lists_and_quotes() {
        let html = markdown_to_html("- one\n- two\n\n> quoted\n");
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn test_reader_document() {
        let doc = render_reader("Reader", "## Ready to Begin?\n").unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Reader</title>"));
        assert!(doc.contains("<h2>Ready to Begin?</h2>"));
    }
}
