//! Language registry for the lit documentation generator.
//!
//! Maps a file extension to a [`LanguageProfile`] describing the language's
//! single-line comment symbol and the name the syntax highlighter knows it by.
//! Every profile carries matchers derived once at construction:
//!
//! - a comment matcher used to separate documentation lines from code lines
//! - a sentinel line written between code fragments before highlighting
//! - a matcher recognizing that sentinel in the highlighter's HTML output
//!
//! The registry is built once before any file is processed and is read-only
//! afterwards, so it can be shared across threads by reference.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use lit_language::LanguageRegistry;
//!
//! let registry = LanguageRegistry::builtin();
//! let profile = registry.resolve(Path::new("src/main.go")).unwrap();
//! assert_eq!(profile.highlighter_name(), "go");
//! assert_eq!(profile.comment_symbol(), "//");
//! ```

mod profile;
mod registry;

pub use profile::{LanguageProfile, ProfileError};
pub use registry::{LanguageRegistry, LanguageRegistryBuilder, UnsupportedLanguage};
