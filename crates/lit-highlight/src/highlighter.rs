//! Highlighter boundary and the external process backend.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use lit_language::LanguageProfile;

use crate::error::HighlightError;

/// Highlighter program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "pygmentize";

/// Converts source text into highlighted HTML.
///
/// Implementations receive the whole batched input of one file and return
/// the complete output, container markup included. Sentinel lines in the
/// input must come back as whole lines, optionally wrapped in one `<span>`.
pub trait Highlighter: Send + Sync {
    /// Highlight `source` as the language described by `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError`] if highlighting fails; no partial output is
    /// returned.
    fn highlight(&self, profile: &LanguageProfile, source: &str) -> Result<String, HighlightError>;
}

/// Runs Pygments (`pygmentize`) as a child process.
///
/// Invoked as `<program> -l <language> -f html -O encoding=utf-8`, reading
/// source on stdin and writing HTML on stdout.
#[derive(Debug, Clone)]
pub struct PygmentsHighlighter {
    program: String,
}

impl Default for PygmentsHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl PygmentsHighlighter {
    /// Create a highlighter running the given program.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this highlighter runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Highlighter for PygmentsHighlighter {
    fn highlight(&self, profile: &LanguageProfile, source: &str) -> Result<String, HighlightError> {
        tracing::debug!(
            program = %self.program,
            language = profile.highlighter_name(),
            bytes = source.len(),
            "Running highlighter"
        );

        // Spawn before writing anything so the child drains its stdin while
        // we feed it.
        let mut child = Command::new(&self.program)
            .args(["-l", profile.highlighter_name(), "-f", "html", "-O", "encoding=utf-8"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HighlightError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("highlighter stdin not captured"))?;

        // Write on a separate thread while this one drains stdout and stderr;
        // a large input would otherwise block on a full pipe.
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || {
                stdin.write_all(source.as_bytes())?;
                stdin.flush()
                // stdin is dropped here, closing the pipe
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("highlighter writer panicked")));
            (output, written)
        });

        let output = output?;
        if !output.status.success() {
            return Err(HighlightError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        written?;

        String::from_utf8(output.stdout)
            .map_err(|e| HighlightError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn go() -> LanguageProfile {
        LanguageProfile::new("go", "//").unwrap()
    }

    #[test]
    fn test_default_program() {
        assert_eq!(PygmentsHighlighter::default().program(), "pygmentize");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let highlighter = PygmentsHighlighter::new("lit-test-no-such-highlighter");
        let err = highlighter.highlight(&go(), "x\n").unwrap_err();
        match err {
            HighlightError::Spawn { program, .. } => {
                assert_eq!(program, "lit-test-no-such-highlighter");
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    mod unix {
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        use tempfile::TempDir;

        use super::*;

        /// Write an executable shell script and return its path.
        fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
            let path = dir.path().join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_passes_language_and_format_arguments() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "args.sh", "cat > /dev/null\necho \"$@\"");
            let highlighter = PygmentsHighlighter::new(path.to_string_lossy());

            let output = highlighter.highlight(&go(), "x\n").unwrap();

            assert_eq!(output, "-l go -f html -O encoding=utf-8\n");
        }

        #[test]
        fn test_large_input_does_not_block() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "cat.sh", "cat");
            let highlighter = PygmentsHighlighter::new(path.to_string_lossy());
            let source = "fmt.Println(\"hello\")\n".repeat(100_000);

            let output = highlighter.highlight(&go(), &source).unwrap();

            assert_eq!(output.len(), source.len());
        }

        #[test]
        fn test_non_zero_exit_is_failure() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "fail.sh", "echo 'no lexer for alias' >&2\nexit 1");
            let highlighter = PygmentsHighlighter::new(path.to_string_lossy());

            let err = highlighter.highlight(&go(), "x\n").unwrap_err();

            match err {
                HighlightError::Failed { stderr, .. } => {
                    assert_eq!(stderr, "no lexer for alias");
                }
                other => panic!("expected failure, got {other:?}"),
            }
        }
    }
}
