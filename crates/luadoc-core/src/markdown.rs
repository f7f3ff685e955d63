//! Markdown conversion and HTML escaping for documentation text
//!
//! Every user-supplied text fragment goes through the same markdown-to-HTML
//! step before it is appended to an output buffer. The conversion is a
//! capability so hosts can plug in their own dialect; [`CommonMark`] is the
//! default implementation.

use pulldown_cmark::{html, Options, Parser};

/// Capability for converting lightweight markup into HTML
pub trait MarkdownToHtml {
    /// Convert markdown text to an HTML fragment
    fn convert(&self, text: &str) -> String;
}

/// CommonMark converter backed by `pulldown-cmark`
#[derive(Debug, Clone, Copy)]
pub struct CommonMark {
    options: Options,
}

impl CommonMark {
    /// Create a converter with tables and strikethrough enabled
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }
}

impl Default for CommonMark {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownToHtml for CommonMark {
    fn convert(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options);
        let mut output = String::new();
        html::push_html(&mut output, parser);
        output
    }
}

/// Strip a single enclosing top-level paragraph wrapper
///
/// Conversions of one-paragraph text come back as `<p>BODY</p>`; inserting
/// that into an inline position would nest block elements, so the wrapper is
/// removed. Multi-paragraph conversions keep their markup unchanged.
pub(crate) fn strip_paragraph(converted: &str) -> &str {
    let trimmed = converted.trim_end();
    if let Some(body) = trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        if !body.contains("<p>") {
            return body;
        }
    }
    trimmed
}

/// Escape text for insertion into HTML
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
