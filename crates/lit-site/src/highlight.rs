//! Highlighting stage: fills in each fragment's `code_html`.

use lit_highlight::{HighlightError, Highlighter, highlight_batch};
use lit_language::LanguageProfile;

use crate::fragment::Fragment;

/// Highlight all fragments of one file with a single highlighter run.
///
/// Documentation fields are left untouched. On error no fragment is modified.
///
/// # Errors
///
/// Returns [`HighlightError`] if the highlighter fails or its output cannot
/// be realigned with the fragments.
pub fn highlight<H>(
    highlighter: &H,
    profile: &LanguageProfile,
    fragments: &mut [Fragment],
) -> Result<(), HighlightError>
where
    H: Highlighter + ?Sized,
{
    let code: Vec<&str> = fragments.iter().map(|f| f.code_text.as_str()).collect();
    let html = highlight_batch(highlighter, profile, &code)?;

    for (fragment, code_html) in fragments.iter_mut().zip(html) {
        fragment.code_html = code_html;
    }
    Ok(())
}
