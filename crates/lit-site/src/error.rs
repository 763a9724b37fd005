//! Error types for page generation.

use std::io;
use std::path::{Path, PathBuf};

use lit_highlight::HighlightError;
use lit_language::UnsupportedLanguage;

/// Failure to generate the page for one source file.
///
/// Every variant carries the source path, so errors can be reported per file.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{}: {}", .0.path.display(), .0)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),

    #[error("{}: failed to read source: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Highlight {
        path: PathBuf,
        #[source]
        source: HighlightError,
    },

    #[error("{}: failed to write page: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Source file this error belongs to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::UnsupportedLanguage(err) => &err.path,
            Self::Read { path, .. } | Self::Highlight { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }
}

/// Failure to prepare the output directory before any page is generated.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write stylesheet {}: {source}", path.display())]
    Stylesheet {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing bundled asset: {0}")]
    MissingAsset(&'static str),
}
