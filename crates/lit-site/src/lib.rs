//! Side-by-side documentation page generation.
//!
//! Turns source files into two-column HTML pages: comment text rendered as
//! markdown next to the highlighted code it describes.
//!
//! The pipeline per file:
//!
//! 1. Resolve the language from the file extension ([`lit_language`])
//! 2. [`split`] the source into documentation/code [`Fragment`]s
//! 3. [`highlight`] all code in one highlighter run ([`lit_highlight`])
//! 4. [`assemble`] a [`Document`] with markdown-rendered documentation
//! 5. [`render_page`] and write `<output_dir>/<stem>.html`
//!
//! [`Generator`] drives the pipeline for a whole run, processing files in
//! parallel and reporting failures per file.
//!
//! # Example
//!
//! ```ignore
//! use lit_highlight::PygmentsHighlighter;
//! use lit_language::LanguageRegistry;
//! use lit_site::Generator;
//!
//! let registry = LanguageRegistry::builtin();
//! let highlighter = PygmentsHighlighter::default();
//! let generator = Generator::new(&registry, &highlighter, "docs", sources);
//! generator.prepare_output()?;
//! let report = generator.run();
//! ```

mod document;
mod error;
mod fragment;
mod generator;
mod highlight;
mod markdown;
mod template;

pub use document::{Document, RenderedFragment, assemble};
pub use error::{GenerateError, SetupError};
pub use fragment::{Fragment, split};
pub use generator::{Generator, RunReport};
pub use highlight::highlight;
pub use markdown::render_markdown;
pub use template::{base_name, destination, render_page};
