//! Per-file generation pipeline and the parallel run over all sources.
//!
//! Each source goes through resolve, read, split, highlight, assemble and
//! render, then its page is written in a single step. Files are processed in
//! parallel on the global rayon pool and joined once; a failing file never
//! stops the others.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use lit_highlight::Highlighter;
use lit_language::LanguageRegistry;
use rayon::prelude::*;

use crate::document::{Document, assemble};
use crate::error::{GenerateError, SetupError};
use crate::fragment::split;
use crate::highlight::highlight;
use crate::template::{destination, render_page};

/// Outcome of a run over every source.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Pages written, in source order.
    pub written: Vec<PathBuf>,
    /// Files that failed, in source order.
    pub failed: Vec<GenerateError>,
}

impl RunReport {
    /// Whether every source produced a page.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Documentation generator for a fixed set of sources.
///
/// Holds only shared read-only state, so one generator serves every parallel
/// task of a run.
pub struct Generator<'a> {
    registry: &'a LanguageRegistry,
    highlighter: &'a dyn Highlighter,
    output_dir: PathBuf,
    sources: Vec<PathBuf>,
}

impl<'a> Generator<'a> {
    /// Create a generator. Sources are sorted and deduplicated.
    pub fn new(
        registry: &'a LanguageRegistry,
        highlighter: &'a dyn Highlighter,
        output_dir: impl Into<PathBuf>,
        sources: impl IntoIterator<Item = PathBuf>,
    ) -> Self {
        let mut sources: Vec<PathBuf> = sources.into_iter().collect();
        sources.sort();
        sources.dedup();
        Self {
            registry,
            highlighter,
            output_dir: output_dir.into(),
            sources,
        }
    }

    /// All sources of the run, sorted.
    #[must_use]
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Output directory pages are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether any source has a registered language.
    ///
    /// Checked before [`prepare_output`](Self::prepare_output) so a run where
    /// every source is unsupported leaves the filesystem untouched.
    #[must_use]
    pub fn has_supported_sources(&self) -> bool {
        self.sources
            .iter()
            .any(|path| self.registry.resolve(path).is_ok())
    }

    /// Create the output directory and write the stylesheet into it.
    pub fn prepare_output(&self) -> Result<(), SetupError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| SetupError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let css = lit_assets::stylesheet().ok_or(SetupError::MissingAsset(lit_assets::STYLESHEET))?;
        let path = self.output_dir.join(lit_assets::STYLESHEET);
        fs::write(&path, css).map_err(|source| SetupError::Stylesheet { path, source })?;
        tracing::debug!(dir = %self.output_dir.display(), "Prepared output directory");
        Ok(())
    }

    /// Build the document model for one source without writing anything.
    ///
    /// The language is resolved before the file is touched.
    pub fn render(&self, path: &Path) -> Result<Document<'_>, GenerateError> {
        let profile = self.registry.resolve(path)?;

        let source = fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut fragments = split(profile, &source);
        tracing::debug!(
            path = %path.display(),
            language = profile.highlighter_name(),
            fragments = fragments.len(),
            "Split source"
        );

        highlight(self.highlighter, profile, &mut fragments).map_err(|source| {
            GenerateError::Highlight {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(assemble(path, fragments, &self.sources))
    }

    /// Generate and write the page for one source, returning its path.
    ///
    /// The page is rendered in memory and persisted with a rename, so a
    /// failed file leaves no partial output behind.
    pub fn process(&self, path: &Path) -> Result<PathBuf, GenerateError> {
        let document = self.render(path)?;
        let html = render_page(&document);

        let target = self.output_dir.join(destination(path));
        write_atomic(&self.output_dir, &target, html.as_bytes()).map_err(|source| {
            GenerateError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::info!("{} -> {}", path.display(), target.display());
        Ok(target)
    }

    /// Process every source in parallel and collect the outcome.
    ///
    /// Sources sharing a file stem map to the same page; it is reported once
    /// and the collision is logged.
    #[must_use]
    pub fn run(&self) -> RunReport {
        let results: Vec<Result<PathBuf, GenerateError>> = self
            .sources
            .par_iter()
            .map(|path| self.process(path))
            .collect();

        let mut report = RunReport::default();
        let mut seen = HashSet::with_capacity(results.len());
        for result in results {
            match result {
                Ok(target) => {
                    if seen.insert(target.clone()) {
                        report.written.push(target);
                    } else {
                        tracing::warn!(
                            page = %target.display(),
                            "Several sources map to the same page, only one of them is kept"
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!(path = %err.path().display(), "Failed to generate page: {err}");
                    report.failed.push(err);
                }
            }
        }
        report
    }
}

fn write_atomic(dir: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    // Temp files default to 0600; pages get the mode `fs::write` would give.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir)?;
    file.write_all(contents)?;
    file.persist(target).map_err(|err| err.error)?;
    Ok(())
}
