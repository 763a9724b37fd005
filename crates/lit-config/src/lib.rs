//! Configuration management for lit.
//!
//! Parses `lit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [output]
//! dir = "docs"
//!
//! [highlighter]
//! command = "pygmentize"
//!
//! [[languages]]
//! extension = "ex"
//! name = "elixir"
//! symbol = "#"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `output.dir` and `highlighter.command` support `${VAR}` (error if unset)
//! and `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override highlighter program.
    pub highlighter: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lit.toml";

/// Default output directory, relative to the config file or working directory.
const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Default highlighter program.
const DEFAULT_HIGHLIGHTER: &str = "pygmentize";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Highlighter configuration.
    pub highlighter: HighlighterConfig,
    /// Languages added to (or replacing) the built-in registry.
    pub languages: Vec<LanguageConfig>,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory receiving generated pages and the stylesheet.
    pub dir: PathBuf,
}

/// Highlighter configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HighlighterConfig {
    /// Program invoked as a Pygments-compatible highlighter.
    pub command: String,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_HIGHLIGHTER.to_owned(),
        }
    }
}

/// A language registered from configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    /// File extension, with or without leading dot.
    pub extension: String,
    /// Language name passed to the highlighter.
    pub name: String,
    /// Single-line comment symbol.
    pub symbol: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`highlighter.command`").
        field: String,
        /// Error message (e.g., "${`PYGMENTIZE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lit.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(highlighter) = &settings.highlighter {
            self.highlighter.command.clone_from(highlighter);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            output: OutputConfigRaw::default(),
            highlighter: HighlighterConfig::default(),
            languages: Vec::new(),
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::parse(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, resolving relative paths against `config_dir`.
    fn parse(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.resolve(config_dir);

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.highlighter.command, "highlighter.command")?;
        if self.output_resolved.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.dir cannot be empty".to_owned(),
            ));
        }
        self.validate_languages()
    }

    /// Validate configured languages.
    fn validate_languages(&self) -> Result<(), ConfigError> {
        for (i, language) in self.languages.iter().enumerate() {
            require_non_empty(&language.extension, &format!("languages[{i}].extension"))?;
            require_non_empty(&language.name, &format!("languages[{i}].name"))?;
            require_non_empty(&language.symbol, &format!("languages[{i}].symbol"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.highlighter.command =
            expand::expand_env(&self.highlighter.command, "highlighter.command")?;

        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths and normalise language extensions.
    fn resolve(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)),
        };

        for language in &mut self.languages {
            let extension = language.extension.trim().trim_start_matches('.');
            language.extension = extension.to_owned();
        }
    }
}
