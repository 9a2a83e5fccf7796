//! Output utilities
//!
//! Status lines go to stdout, errors to stderr, progress to the terminal.

mod formatter;
mod progress;

pub use formatter::Formatter;
pub use progress::ProgressBar;

/// Output configuration derived from CLI flags and the config file
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress non-error output
    pub quiet: bool,
    /// Verbose diagnostics; overrides quiet
    pub debug: bool,
    /// Disable progress bar
    pub no_progress: bool,
}

impl OutputConfig {
    /// Whether status messages are printed
    ///
    /// Debug mode overrides quiet mode.
    pub fn shows_status(&self) -> bool {
        !self.quiet || self.debug
    }

    /// Whether a progress bar may be drawn
    ///
    /// Never in debug mode, where it would interleave with log lines.
    pub fn shows_progress(&self) -> bool {
        !self.quiet && !self.debug && !self.no_progress
    }
}
