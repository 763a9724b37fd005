//! Page generation for the files given on the command line.

use std::path::PathBuf;

use clap::Args;
use lit_config::{CliSettings, Config, LanguageConfig};
use lit_highlight::PygmentsHighlighter;
use lit_language::{LanguageRegistry, ProfileError};
use lit_site::Generator;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for generating documentation.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Source files to document.
    files: Vec<PathBuf>,

    /// Directory receiving the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Pygments-compatible highlighter program (overrides config).
    #[arg(long, value_name = "PROGRAM", env = "LIT_HIGHLIGHTER")]
    highlighter: Option<String>,

    /// Path to configuration file (default: auto-discover lit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every generated page and per-stage details.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Generate one page per source file.
    ///
    /// Returns `Ok(false)` when at least one file failed; the other files
    /// are still written.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the output directory
    /// cannot be prepared.
    pub(crate) fn execute(self, output: &Output) -> Result<bool, CliError> {
        if self.files.is_empty() {
            tracing::debug!("No source files given");
            return Ok(true);
        }

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            highlighter: self.highlighter,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let registry = build_registry(&config.languages)?;
        let highlighter = PygmentsHighlighter::new(config.highlighter.command.clone());
        let output_dir = &config.output_resolved.dir;

        let generator = Generator::new(&registry, &highlighter, output_dir, self.files);
        // Nothing is written when no source can be documented
        if generator.has_supported_sources() {
            generator.prepare_output()?;
        }
        let report = generator.run();

        output.report(&report, output_dir);
        Ok(report.is_success())
    }
}

/// Built-in languages plus those declared in configuration.
fn build_registry(languages: &[LanguageConfig]) -> Result<LanguageRegistry, ProfileError> {
    languages
        .iter()
        .fold(LanguageRegistry::builder(), |builder, language| {
            builder.language(&language.extension, &language.name, &language.symbol)
        })
        .try_build()
}
