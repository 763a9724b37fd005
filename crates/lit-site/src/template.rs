//! HTML page template for side-by-side documentation.
//!
//! Two-column layout: rendered documentation on the left, highlighted code
//! on the right, one table row per fragment. A "Jump To" menu linking every
//! page of the run is rendered when more than one source is processed.

use std::fmt::Write;
use std::path::Path;

use lit_assets::STYLESHEET;

use crate::document::Document;

/// Base name of a path (`src/main.go` -> `main.go`).
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output file name for a source path, relative to the output directory.
///
/// The base name's extension is replaced with `.html` (`src/main.go` -> `main.html`).
#[must_use]
pub fn destination(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.html")
}

/// Render a complete documentation page.
pub fn render_page(document: &Document<'_>) -> String {
    let code_len: usize = document
        .sections
        .iter()
        .map(|s| s.docs_html.len() + s.code_html.len())
        .sum();
    let mut html = String::with_capacity(code_len + 4096);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&document.title));
    html.push_str("<meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\">\n");
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" media=\"all\" href=\"{STYLESHEET}\" />"
    );
    html.push_str("</head>\n<body>\n");
    html.push_str("<div id=\"container\">\n<div id=\"background\"></div>\n");

    if document.multiple {
        render_jump_menu(&mut html, document);
    }

    html.push_str("<table cellpadding=\"0\" cellspacing=\"0\">\n");
    html.push_str("<thead>\n<tr>\n<th class=\"docs\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&document.title));
    html.push_str("</th>\n<th class=\"code\">\n</th>\n</tr>\n</thead>\n");

    html.push_str("<tbody>\n");
    for section in &document.sections {
        let _ = writeln!(html, "<tr id=\"section-{}\">", section.index);
        html.push_str("<td class=\"docs\">\n<div class=\"pilwrap\">\n");
        let _ = writeln!(
            html,
            "<a class=\"pilcrow\" href=\"#section-{}\">&#182;</a>",
            section.index
        );
        html.push_str("</div>\n");
        html.push_str(&section.docs_html);
        html.push_str("\n</td>\n<td class=\"code\">\n");
        html.push_str(&section.code_html);
        html.push_str("\n</td>\n</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n</body>\n</html>\n");
    html
}

/// Render the navigation menu linking every source's page.
fn render_jump_menu(html: &mut String, document: &Document<'_>) {
    html.push_str("<div id=\"jump_to\">\nJump To &hellip;\n<div id=\"jump_wrapper\">\n");
    html.push_str("<div id=\"jump_page\">\n");
    for source in document.sources {
        let _ = writeln!(
            html,
            "<a class=\"source\" href=\"{}\">{}</a>",
            escape(&destination(source)),
            escape(&base_name(source)),
        );
    }
    html.push_str("</div>\n</div>\n</div>\n");
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::document::RenderedFragment;

    fn document<'a>(sources: &'a [PathBuf]) -> Document<'a> {
        Document {
            title: "main.go".to_owned(),
            sections: vec![
                RenderedFragment {
                    docs_html: "<p>First</p>\n".to_owned(),
                    code_html: "<div class=\"highlight\"><pre>a</pre></div>".to_owned(),
                    index: 1,
                },
                RenderedFragment {
                    docs_html: "<p>Second</p>\n".to_owned(),
                    code_html: "<div class=\"highlight\"><pre>b</pre></div>".to_owned(),
                    index: 2,
                },
            ],
            sources,
            multiple: sources.len() > 1,
        }
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("src/lexer/scan.go")), "scan.go");
        assert_eq!(base_name(Path::new("main.go")), "main.go");
    }

    #[test]
    fn test_destination() {
        assert_eq!(destination(Path::new("src/lexer/scan.go")), "scan.html");
        assert_eq!(destination(Path::new("lib.test.py")), "lib.test.html");
        assert_eq!(destination(Path::new("Makefile")), "Makefile.html");
    }

    #[test]
    fn test_render_page_contains_sections() {
        let sources = vec![PathBuf::from("main.go")];
        let html = render_page(&document(&sources));

        assert!(html.contains("<title>main.go</title>"));
        assert!(html.contains("href=\"lit.css\""));
        assert!(html.contains("<tr id=\"section-1\">"));
        assert!(html.contains("<a class=\"pilcrow\" href=\"#section-2\">&#182;</a>"));
        assert!(html.contains("<p>First</p>"));
        assert!(html.contains("<div class=\"highlight\"><pre>b</pre></div>"));
    }

    #[test]
    fn test_sections_in_order() {
        let sources = vec![PathBuf::from("main.go")];
        let html = render_page(&document(&sources));
        let first = html.find("<p>First</p>").unwrap();
        let second = html.find("<p>Second</p>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_single_source_has_no_jump_menu() {
        let sources = vec![PathBuf::from("main.go")];
        let html = render_page(&document(&sources));
        assert!(!html.contains("jump_to"));
    }

    #[test]
    fn test_multiple_sources_have_jump_menu() {
        let sources = vec![PathBuf::from("cmd/main.go"), PathBuf::from("util.go")];
        let html = render_page(&document(&sources));
        assert!(html.contains("Jump To &hellip;"));
        assert!(html.contains("<a class=\"source\" href=\"main.html\">main.go</a>"));
        assert!(html.contains("<a class=\"source\" href=\"util.html\">util.go</a>"));
    }

    #[test]
    fn test_title_escaped() {
        let sources = vec![PathBuf::from("a<b>.go")];
        let mut doc = document(&sources);
        doc.title = "a<b>.go".to_owned();
        let html = render_page(&doc);
        assert!(html.contains("<title>a&lt;b&gt;.go</title>"));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a&b"), "a&amp;b");
        assert_eq!(escape("\"hello\""), "&quot;hello&quot;");
    }
}
