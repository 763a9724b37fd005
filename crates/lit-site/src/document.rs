//! Assembling rendered fragments into a per-file document model.

use std::path::{Path, PathBuf};

use crate::fragment::Fragment;
use crate::markdown::render_markdown;
use crate::template::base_name;

/// A fragment ready for the page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFragment {
    /// Documentation rendered from markdown.
    pub docs_html: String,
    /// Highlighted code.
    pub code_html: String,
    /// 1-based position, used for `#section-N` anchors.
    pub index: usize,
}

/// Everything the page template needs for one source file.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Page title (the source file's base name).
    pub title: String,
    /// Rendered fragments in source order.
    pub sections: Vec<RenderedFragment>,
    /// Every source of the run, sorted, for the navigation menu.
    pub sources: &'a [PathBuf],
    /// Whether more than one source is processed (controls the menu).
    pub multiple: bool,
}

/// Render documentation text and pair it with highlighted code.
#[must_use]
pub fn assemble<'a>(path: &Path, fragments: Vec<Fragment>, sources: &'a [PathBuf]) -> Document<'a> {
    let sections = fragments
        .into_iter()
        .enumerate()
        .map(|(i, fragment)| RenderedFragment {
            docs_html: render_markdown(&fragment.docs_text),
            code_html: fragment.code_html,
            index: i + 1,
        })
        .collect();

    Document {
        title: base_name(path),
        sections,
        sources,
        multiple: sources.len() > 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fragment(docs: &str, code_html: &str) -> Fragment {
        Fragment {
            docs_text: docs.to_owned(),
            code_text: String::new(),
            code_html: code_html.to_owned(),
        }
    }

    #[test]
    fn test_assemble_indexes_from_one() {
        let sources = vec![PathBuf::from("src/a.go")];
        let document = assemble(
            Path::new("src/a.go"),
            vec![fragment("# A\n", "<pre>a</pre>"), fragment("b\n", "<pre>b</pre>")],
            &sources,
        );

        assert_eq!(document.title, "a.go");
        assert_eq!(
            document.sections,
            vec![
                RenderedFragment {
                    docs_html: "<h1>A</h1>\n".to_owned(),
                    code_html: "<pre>a</pre>".to_owned(),
                    index: 1,
                },
                RenderedFragment {
                    docs_html: "<p>b</p>\n".to_owned(),
                    code_html: "<pre>b</pre>".to_owned(),
                    index: 2,
                },
            ]
        );
        assert!(!document.multiple);
    }

    #[test]
    fn test_assemble_multiple_sources() {
        let sources = vec![PathBuf::from("a.go"), PathBuf::from("b.go")];
        let document = assemble(Path::new("b.go"), vec![fragment("", "")], &sources);

        assert!(document.multiple);
        assert_eq!(document.sources, sources.as_slice());
        assert_eq!(document.sections[0].docs_html, "");
    }

    #[test]
    fn test_fragments_render_independently() {
        // A list in the first fragment must not swallow the heading of the second
        let sources = vec![PathBuf::from("a.go")];
        let document = assemble(
            Path::new("a.go"),
            vec![fragment("- one\n- two\n", ""), fragment("## Next\n", "")],
            &sources,
        );
        assert!(document.sections[0].docs_html.contains("<ul>"));
        assert_eq!(document.sections[1].docs_html, "<h2>Next</h2>\n");
    }
}
