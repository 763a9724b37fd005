//! Splitting source files into documentation/code fragments.

use lit_language::LanguageProfile;

/// One documentation + code pair of a source file.
///
/// A new fragment starts whenever a comment line follows code, so each
/// fragment's code is one contiguous block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Comment text with comment prefixes stripped, one `\n` per line.
    pub docs_text: String,
    /// Raw code lines, one `\n` per line.
    pub code_text: String,
    /// Highlighted code, filled in by [`highlight`](crate::highlight).
    pub code_html: String,
}

impl Fragment {
    fn new(docs_text: String, code_text: String) -> Self {
        Self {
            docs_text,
            code_text,
            code_html: String::new(),
        }
    }
}

/// Split source text into ordered fragments.
///
/// Always returns at least one fragment. The last fragment is emitted even if
/// its documentation or code is empty, so trailing content is never dropped.
/// A terminating newline does not produce an extra empty line.
#[must_use]
pub fn split(profile: &LanguageProfile, source: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut docs = String::new();
    let mut code = String::new();
    let mut has_code = false;

    for line in source.split_terminator('\n') {
        if let Some(text) = profile.strip_comment(line) {
            // Code must reach the highlighter as contiguous blocks, so a
            // comment after code closes the current fragment.
            if has_code {
                fragments.push(Fragment::new(
                    std::mem::take(&mut docs),
                    std::mem::take(&mut code),
                ));
                has_code = false;
            }
            docs.push_str(text);
            docs.push('\n');
        } else {
            has_code = true;
            code.push_str(line);
            code.push('\n');
        }
    }

    fragments.push(Fragment::new(docs, code));
    fragments
}
