//! Sentinel-delimited batching of code fragments.
//!
//! The round trip for `n` fragments:
//!
//! 1. [`join_fragments`] concatenates them with `n - 1` sentinel lines
//! 2. the highlighter renders the combined text once
//! 3. [`split_highlighted`] strips the container markup, splits on the
//!    highlighted sentinel and re-wraps every piece
//!
//! The split must yield exactly `n` pieces. Anything else means the
//! highlighter output cannot be attributed to fragments and is an error.

use lit_language::LanguageProfile;

use crate::error::HighlightError;
use crate::highlighter::Highlighter;
use crate::{HIGHLIGHT_END, HIGHLIGHT_START};

/// Highlight every code fragment of one file with a single highlighter call.
///
/// Returns one HTML string per fragment, in input order, each wrapped in
/// [`HIGHLIGHT_START`] / [`HIGHLIGHT_END`]. Newlines adjacent to a sentinel
/// are consumed together with it.
///
/// # Errors
///
/// Returns the highlighter's error, or [`HighlightError::SentinelMismatch`]
/// when the output does not contain exactly `fragments.len() - 1` sentinels.
pub fn highlight_batch<H>(
    highlighter: &H,
    profile: &LanguageProfile,
    fragments: &[&str],
) -> Result<Vec<String>, HighlightError>
where
    H: Highlighter + ?Sized,
{
    if fragments.is_empty() {
        return Ok(Vec::new());
    }

    let input = join_fragments(profile, fragments);
    let output = highlighter.highlight(profile, &input)?;
    let pieces = split_highlighted(profile, &output, fragments.len())?;

    tracing::debug!(
        language = profile.highlighter_name(),
        fragments = pieces.len(),
        "Highlighted fragments"
    );
    Ok(pieces)
}

/// Join code fragments with the profile's sentinel line between them.
#[must_use]
pub fn join_fragments(profile: &LanguageProfile, fragments: &[&str]) -> String {
    let sentinel = profile.sentinel_text();
    let capacity = fragments.iter().map(|f| f.len()).sum::<usize>()
        + sentinel.len() * fragments.len().saturating_sub(1);

    let mut input = String::with_capacity(capacity);
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            input.push_str(sentinel);
        }
        input.push_str(fragment);
    }
    input
}

/// Split combined highlighter output into `expected` wrapped fragments.
///
/// # Errors
///
/// Returns [`HighlightError::SentinelMismatch`] if the output does not split
/// into exactly `expected` pieces.
pub fn split_highlighted(
    profile: &LanguageProfile,
    output: &str,
    expected: usize,
) -> Result<Vec<String>, HighlightError> {
    if expected == 0 {
        return Ok(Vec::new());
    }

    let stripped = output.replace(HIGHLIGHT_START, "").replace(HIGHLIGHT_END, "");
    let pieces: Vec<&str> = profile.sentinel_matcher().split(&stripped).collect();

    if pieces.len() != expected {
        return Err(HighlightError::SentinelMismatch {
            expected: expected - 1,
            found: pieces.len() - 1,
        });
    }

    Ok(pieces
        .into_iter()
        .map(|piece| format!("{HIGHLIGHT_START}{piece}{HIGHLIGHT_END}"))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    fn go() -> LanguageProfile {
        LanguageProfile::new("go", "//").unwrap()
    }

    fn wrap(s: &str) -> String {
        format!("{HIGHLIGHT_START}{s}{HIGHLIGHT_END}")
    }

    /// Echoes its input inside the container markup.
    #[derive(Default)]
    struct Identity {
        calls: AtomicUsize,
    }

    impl Highlighter for Identity {
        fn highlight(&self, _: &LanguageProfile, source: &str) -> Result<String, HighlightError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(wrap(source))
        }
    }

    /// Mimics Pygments: comment lines wrapped in spans, trailing newlines stripped.
    struct PygmentsLike;

    impl Highlighter for PygmentsLike {
        fn highlight(&self, profile: &LanguageProfile, source: &str) -> Result<String, HighlightError> {
            let mut html = String::from(HIGHLIGHT_START);
            for line in source.trim_end_matches('\n').split('\n') {
                if line.starts_with(profile.comment_symbol()) {
                    html.push_str(&format!("<span class=\"c1\">{line}</span>\n"));
                } else if !line.is_empty() {
                    html.push_str(&format!("<span class=\"n\">{line}</span>\n"));
                } else {
                    html.push('\n');
                }
            }
            html.push_str(HIGHLIGHT_END);
            Ok(html)
        }
    }

    /// Drops every sentinel line.
    struct SentinelEater;

    impl Highlighter for SentinelEater {
        fn highlight(&self, profile: &LanguageProfile, source: &str) -> Result<String, HighlightError> {
            Ok(wrap(&source.replace(profile.sentinel_text(), "\n")))
        }
    }

    #[test]
    fn test_join_fragments() {
        let joined = join_fragments(&go(), &["a\n", "b\n", "c\n"]);
        assert_eq!(joined, "a\n\n//DIVIDER\nb\n\n//DIVIDER\nc\n");
    }

    #[test]
    fn test_join_single_fragment_has_no_sentinel() {
        assert_eq!(join_fragments(&go(), &["a\n"]), "a\n");
    }

    #[test]
    fn test_identity_round_trip() {
        let highlighter = Identity::default();
        let fragments = ["func a() {}\n", "func b() {}\n", "func c() {}\n"];

        let html = highlight_batch(&highlighter, &go(), &fragments).unwrap();

        assert_eq!(
            html,
            vec![
                wrap("func a() {}"),
                wrap("func b() {}"),
                wrap("func c() {}\n"),
            ]
        );
        assert_eq!(highlighter.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_single_fragment() {
        let html = highlight_batch(&Identity::default(), &go(), &["x := 1\n"]).unwrap();
        assert_eq!(html, vec![wrap("x := 1\n")]);
    }

    #[test]
    fn test_no_fragments_skips_highlighter() {
        let highlighter = Identity::default();
        let html = highlight_batch(&highlighter, &go(), &[]).unwrap();
        assert!(html.is_empty());
        assert_eq!(highlighter.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_trailing_fragment() {
        let html = highlight_batch(&Identity::default(), &go(), &["x\n", ""]).unwrap();
        assert_eq!(html, vec![wrap("x"), wrap("")]);
    }

    #[test]
    fn test_comment_symbol_inside_code_is_not_a_sentinel() {
        let fragments = [
            "s := \"//DIVIDER\"\n",
            "url := \"http://example.com\" //DIVIDER\n",
            "y := 2\n",
        ];

        let html = highlight_batch(&Identity::default(), &go(), &fragments).unwrap();

        assert_eq!(html.len(), 3);
        assert_eq!(html[0], wrap("s := \"//DIVIDER\""));
        assert_eq!(html[1], wrap("url := \"http://example.com\" //DIVIDER"));
        assert_eq!(html[2], wrap("y := 2\n"));
    }

    #[test]
    fn test_pygments_like_output() {
        let fragments = ["a\n", "b\n\n", "c\n"];

        let html = highlight_batch(&PygmentsLike, &go(), &fragments).unwrap();

        assert_eq!(
            html,
            vec![
                wrap("<span class=\"n\">a</span>"),
                wrap("<span class=\"n\">b</span>"),
                wrap("<span class=\"n\">c</span>\n"),
            ]
        );
    }

    #[test]
    fn test_missing_sentinel_is_mismatch() {
        let err = highlight_batch(&SentinelEater, &go(), &["a\n", "b\n", "c\n"]).unwrap_err();
        assert!(matches!(
            err,
            HighlightError::SentinelMismatch {
                expected: 2,
                found: 0
            }
        ));
    }

    #[test]
    fn test_extra_sentinel_is_mismatch() {
        let output = wrap("a\n<span class=\"c1\">//DIVIDER</span>\nb\n<span class=\"c1\">//DIVIDER</span>\nc\n");
        let err = split_highlighted(&go(), &output, 2).unwrap_err();
        assert!(matches!(
            err,
            HighlightError::SentinelMismatch {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn test_split_strips_every_container() {
        let output = format!("{HIGHLIGHT_START}a{HIGHLIGHT_END}\n{HIGHLIGHT_START}b{HIGHLIGHT_END}");
        let pieces = split_highlighted(&go(), &output, 1).unwrap();
        assert_eq!(pieces, vec![wrap("a\nb")]);
    }

    #[test]
    fn test_hash_comment_language() {
        let python = LanguageProfile::new("python", "#").unwrap();
        let fragments = ["x = '#DIVIDER'\n", "y = 2\n"];

        let html = highlight_batch(&PygmentsLike, &python, &fragments).unwrap();

        assert_eq!(
            html,
            vec![
                wrap("<span class=\"n\">x = '#DIVIDER'</span>"),
                wrap("<span class=\"n\">y = 2</span>\n"),
            ]
        );
    }
}
