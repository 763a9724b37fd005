//! Extension-keyed registry of language profiles.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::profile::{LanguageProfile, ProfileError};

/// Built-in languages: `(extension, highlighter name, comment symbol)`.
const BUILTIN_LANGUAGES: &[(&str, &str, &str)] = &[
    ("go", "go", "//"),
    ("rs", "rust", "//"),
    ("c", "c", "//"),
    ("h", "c", "//"),
    ("cpp", "cpp", "//"),
    ("hpp", "cpp", "//"),
    ("java", "java", "//"),
    ("js", "javascript", "//"),
    ("ts", "typescript", "//"),
    ("swift", "swift", "//"),
    ("kt", "kotlin", "//"),
    ("scala", "scala", "//"),
    ("py", "python", "#"),
    ("rb", "ruby", "#"),
    ("sh", "bash", "#"),
    ("pl", "perl", "#"),
    ("r", "r", "#"),
    ("yaml", "yaml", "#"),
    ("toml", "toml", "#"),
    ("lua", "lua", "--"),
    ("hs", "haskell", "--"),
    ("sql", "sql", "--"),
    ("erl", "erlang", "%"),
];

/// No profile is registered for a file's extension.
#[derive(Debug)]
pub struct UnsupportedLanguage {
    /// Path that failed to resolve.
    pub path: PathBuf,
    /// Extension of the path, if it has one.
    pub extension: Option<String>,
    /// Sorted list of registered extensions.
    pub supported: Vec<String>,
}

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(ext) => write!(f, "unsupported language extension `.{ext}`")?,
            None => write!(f, "file has no extension")?,
        }
        write!(f, " (supported: ")?;
        for (i, ext) in self.supported.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, ".{ext}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for UnsupportedLanguage {}

/// Immutable mapping from file extension to [`LanguageProfile`].
///
/// Built once at startup; lookups never fall back to a default profile.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: HashMap<String, LanguageProfile>,
}

impl LanguageRegistry {
    /// Registry containing only the built-in languages.
    #[must_use]
    pub fn builtin() -> Self {
        Self::builder().build()
    }

    /// Builder seeded with the built-in languages.
    #[must_use]
    pub fn builder() -> LanguageRegistryBuilder {
        LanguageRegistryBuilder::builtin()
    }

    /// Resolve the profile for a source path by its extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedLanguage`] if the extension has no registered profile.
    pub fn resolve(&self, path: &Path) -> Result<&LanguageProfile, UnsupportedLanguage> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        extension
            .as_deref()
            .and_then(|ext| self.profiles.get(ext))
            .ok_or_else(|| UnsupportedLanguage {
                path: path.to_path_buf(),
                extension,
                supported: self.extensions(),
            })
    }

    /// Registered extensions, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.profiles.keys().cloned().collect();
        extensions.sort();
        extensions
    }

    /// Number of registered languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry has no languages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Builder for [`LanguageRegistry`].
///
/// Registering an extension that already exists replaces its profile.
#[derive(Debug, Default)]
pub struct LanguageRegistryBuilder {
    languages: Vec<(String, String, String)>,
}

impl LanguageRegistryBuilder {
    /// Empty builder with no languages.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn builtin() -> Self {
        let languages = BUILTIN_LANGUAGES
            .iter()
            .map(|&(ext, name, symbol)| (ext.to_owned(), name.to_owned(), symbol.to_owned()))
            .collect();
        Self { languages }
    }

    /// Register a language for an extension.
    ///
    /// A leading dot on the extension is ignored.
    #[must_use]
    pub fn language(
        mut self,
        extension: impl Into<String>,
        highlighter_name: impl Into<String>,
        comment_symbol: impl Into<String>,
    ) -> Self {
        let extension = extension.into();
        let extension = extension.trim_start_matches('.').to_owned();
        self.languages
            .push((extension, highlighter_name.into(), comment_symbol.into()));
        self
    }

    /// Derive every profile and build the registry.
    ///
    /// Built-in entries always derive; use [`try_build`](Self::try_build) when
    /// user-supplied languages were added.
    ///
    /// # Panics
    ///
    /// Panics if a registered language has an empty name or symbol.
    #[must_use]
    pub fn build(self) -> LanguageRegistry {
        self.try_build().expect("invalid built-in language profile")
    }

    /// Derive every profile and build the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if any registered language is invalid.
    pub fn try_build(self) -> Result<LanguageRegistry, ProfileError> {
        let mut profiles = HashMap::with_capacity(self.languages.len());
        for (extension, name, symbol) in self.languages {
            if extension.is_empty() {
                return Err(ProfileError::EmptyField("extension"));
            }
            profiles.insert(extension, LanguageProfile::new(name, symbol)?);
        }
        Ok(LanguageRegistry { profiles })
    }
}
