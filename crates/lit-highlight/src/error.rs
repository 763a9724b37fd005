use std::io;
use std::process::ExitStatus;

/// Highlighting error for one source file.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The highlighter process could not be started.
    #[error("failed to start highlighter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// Writing to or reading from the highlighter failed.
    #[error("highlighter I/O error: {0}")]
    Io(#[from] io::Error),
    /// The highlighter ran but reported failure.
    #[error("highlighter `{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    /// Highlighted output could not be realigned with the fragments.
    #[error("highlighter output contains {found} fragment sentinels, expected {expected}")]
    SentinelMismatch { expected: usize, found: usize },
}
