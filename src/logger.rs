//! User-facing progress output.

use std::fmt::Display;

use console::style;

/// Console reporter for the scaffolding steps.
///
/// Passed explicitly to the pieces that talk to the user; verbosity is a
/// property of the value, not of process-global state.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Announces a pipeline step.
    pub fn step(&self, message: impl Display) {
        println!("{} {}", style("→").cyan(), message);
    }

    /// Extra detail, only shown with `--verbose`.
    pub fn detail(&self, message: impl Display) {
        if self.verbose {
            println!("  {}", style(message).dim());
        }
    }

    pub fn success(&self, message: impl Display) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn warning(&self, message: impl Display) {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }

    pub fn error(&self, message: impl Display) {
        eprintln!("{} {}", style("✗").red(), message);
    }
}
