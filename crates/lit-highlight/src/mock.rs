//! Mock highlighter for testing.
//!
//! Provides [`MockHighlighter`] for pipeline tests that must not depend on an
//! installed Pygments.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use lit_language::LanguageProfile;

use crate::error::HighlightError;
use crate::highlighter::Highlighter;
use crate::{HIGHLIGHT_END, HIGHLIGHT_START};

/// In-process highlighter producing Pygments-shaped output.
///
/// HTML-escapes its input, wraps lines starting with the comment symbol in a
/// `<span class="c1">` and wraps everything in the container markup. Counts
/// calls so tests can check one highlighter run per file.
///
/// # Example
///
/// ```ignore
/// use lit_highlight::{MockHighlighter, highlight_batch};
///
/// let highlighter = MockHighlighter::new();
/// let html = highlight_batch(&highlighter, &profile, &["a\n", "b\n"])?;
/// assert_eq!(highlighter.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockHighlighter {
    calls: AtomicUsize,
    failure: Option<String>,
}

impl MockHighlighter {
    /// Create a mock that highlights successfully.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with an I/O error.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(message.into()),
        }
    }

    /// Number of `highlight` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Highlighter for MockHighlighter {
    fn highlight(&self, profile: &LanguageProfile, source: &str) -> Result<String, HighlightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(HighlightError::Io(io::Error::other(message.clone())));
        }

        let mut html = String::with_capacity(source.len() + 64);
        html.push_str(HIGHLIGHT_START);
        for line in source.split_inclusive('\n') {
            let (text, newline) = match line.strip_suffix('\n') {
                Some(text) => (text, "\n"),
                None => (line, ""),
            };
            if text.starts_with(profile.comment_symbol()) {
                html.push_str("<span class=\"c1\">");
                html.push_str(&escape(text));
                html.push_str("</span>");
            } else {
                html.push_str(&escape(text));
            }
            html.push_str(newline);
        }
        html.push_str(HIGHLIGHT_END);
        Ok(html)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wraps_comment_lines() {
        let profile = LanguageProfile::new("go", "//").unwrap();
        let html = MockHighlighter::new()
            .highlight(&profile, "a < b\n//DIVIDER\n")
            .unwrap();
        assert_eq!(
            html,
            format!("{HIGHLIGHT_START}a &lt; b\n<span class=\"c1\">//DIVIDER</span>\n{HIGHLIGHT_END}")
        );
    }

    #[test]
    fn test_failing_counts_calls() {
        let profile = LanguageProfile::new("go", "//").unwrap();
        let highlighter = MockHighlighter::failing("boom");
        assert!(highlighter.highlight(&profile, "x").is_err());
        assert_eq!(highlighter.calls(), 1);
    }
}
