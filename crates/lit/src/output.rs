//! Colored terminal output for run results.

use std::path::Path;

use console::{Style, Term};
use lit_site::RunReport;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    dim: Style,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            dim: Style::new().dim(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print every written page, every failure, and a closing summary line.
    pub(crate) fn report(&self, report: &RunReport, output_dir: &Path) {
        for page in &report.written {
            let line = format!("  {}", page.display());
            let _ = self.term.write_line(&self.dim.apply_to(line).to_string());
        }
        for err in &report.failed {
            self.error(&format!("Error: {err}"));
        }

        let written = report.written.len();
        let total = written + report.failed.len();
        if report.is_success() {
            let msg = format!("Generated {written} {} in {}", pages(written), output_dir.display());
            let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
        } else {
            let msg = format!(
                "Generated {written} of {total} {}, {} failed",
                pages(total),
                report.failed.len()
            );
            let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
        }
    }
}

fn pages(count: usize) -> &'static str {
    if count == 1 { "page" } else { "pages" }
}
