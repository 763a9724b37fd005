//! Per-language comment syntax and derived matchers.

use regex::Regex;

/// Marker appended to the comment symbol to form the sentinel line.
const SENTINEL_MARKER: &str = "DIVIDER";

/// Error building a [`LanguageProfile`].
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("language profile field `{0}` cannot be empty")]
    EmptyField(&'static str),
    #[error("invalid matcher for comment symbol {symbol:?}: {source}")]
    Matcher {
        symbol: String,
        #[source]
        source: regex::Error,
    },
}

/// Comment syntax and highlighter settings for one language.
///
/// Derived matchers are computed in [`LanguageProfile::new`] and never change.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    highlighter_name: String,
    comment_symbol: String,
    comment_matcher: Regex,
    sentinel_text: String,
    sentinel_matcher: Regex,
}

impl LanguageProfile {
    /// Create a profile and derive its matchers.
    ///
    /// * `highlighter_name` - language name passed to the highlighter (`go`, `python`)
    /// * `comment_symbol` - single-line comment prefix (`//`, `#`)
    pub fn new(
        highlighter_name: impl Into<String>,
        comment_symbol: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let highlighter_name = highlighter_name.into();
        let comment_symbol = comment_symbol.into();
        if highlighter_name.trim().is_empty() {
            return Err(ProfileError::EmptyField("name"));
        }
        if comment_symbol.trim().is_empty() {
            return Err(ProfileError::EmptyField("symbol"));
        }

        let matcher_error = |source| ProfileError::Matcher {
            symbol: comment_symbol.clone(),
            source,
        };

        let comment_matcher = Regex::new(&format!(r"^\s*{}\s?", regex::escape(&comment_symbol)))
            .map_err(matcher_error)?;

        // The highlighter HTML-escapes comment text, so the rendered sentinel
        // contains the escaped symbol. It must occupy a whole line, optionally
        // wrapped in a single span, with any number of newlines around it.
        let rendered = regex::escape(&format!(
            "{}{SENTINEL_MARKER}",
            escape_html(&comment_symbol)
        ));
        let sentinel_matcher =
            Regex::new(&format!(r"(?m)\n*^(?:<span[^>]*>)?{rendered}(?:</span>)?$\n*"))
                .map_err(matcher_error)?;

        Ok(Self {
            sentinel_text: format!("\n{comment_symbol}{SENTINEL_MARKER}\n"),
            highlighter_name,
            comment_symbol,
            comment_matcher,
            sentinel_matcher,
        })
    }

    /// Language name understood by the highlighter.
    #[must_use]
    pub fn highlighter_name(&self) -> &str {
        &self.highlighter_name
    }

    /// Single-line comment prefix.
    #[must_use]
    pub fn comment_symbol(&self) -> &str {
        &self.comment_symbol
    }

    /// Strip the comment prefix from a line.
    ///
    /// Returns `None` if the line is not a comment line, i.e. it does not start
    /// with the comment symbol after optional whitespace. One space following
    /// the symbol is stripped along with it.
    #[must_use]
    pub fn strip_comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.comment_matcher
            .find(line)
            .map(|prefix| &line[prefix.end()..])
    }

    /// Line written between code fragments before highlighting.
    ///
    /// Includes its own leading and trailing newline.
    #[must_use]
    pub fn sentinel_text(&self) -> &str {
        &self.sentinel_text
    }

    /// Matcher for the highlighted sentinel, including surrounding newlines.
    #[must_use]
    pub fn sentinel_matcher(&self) -> &Regex {
        &self.sentinel_matcher
    }
}

/// Escape the characters a highlighter escapes in HTML text content.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
