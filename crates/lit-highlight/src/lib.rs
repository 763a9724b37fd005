//! Batched syntax highlighting for lit.
//!
//! All code fragments of one source file are highlighted with a single
//! highlighter run. Fragments are joined with the language's sentinel line,
//! the combined HTML output is split again on the highlighted sentinel, and
//! each piece is re-wrapped in the highlighter's container markup.
//!
//! # Architecture
//!
//! - [`Highlighter`] trait: text in, the highlighter's full HTML document out
//! - [`PygmentsHighlighter`]: runs `pygmentize` (or a compatible program) as a
//!   child process
//! - [`MockHighlighter`]: in-process stand-in for tests (behind `mock` feature)
//! - [`highlight_batch`]: sentinel insertion, single highlighter call, re-split
//!
//! Any backend works as long as it keeps the sentinel line recognizable as a
//! whole output line and wraps its output in [`HIGHLIGHT_START`] /
//! [`HIGHLIGHT_END`] (or emits no container at all).

mod batch;
mod error;
mod highlighter;
#[cfg(feature = "mock")]
mod mock;

pub use batch::{highlight_batch, join_fragments, split_highlighted};
pub use error::HighlightError;
pub use highlighter::{DEFAULT_PROGRAM, Highlighter, PygmentsHighlighter};
#[cfg(feature = "mock")]
pub use mock::MockHighlighter;

/// Opening container markup emitted by the highlighter.
pub const HIGHLIGHT_START: &str = "<div class=\"highlight\"><pre>";

/// Closing container markup emitted by the highlighter.
pub const HIGHLIGHT_END: &str = "</pre></div>";
