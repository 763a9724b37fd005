//! Markdown rendering for documentation text.

use pulldown_cmark::{Options, Parser, html};

/// Render one fragment's documentation text to HTML.
///
/// Each fragment is rendered on its own, so headings and lists in later
/// fragments do not depend on earlier ones.
#[must_use]
pub fn render_markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(text, options);

    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
