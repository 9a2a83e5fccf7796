//! Output formatter
//!
//! Ensures consistent output across both commands.

use super::OutputConfig;

/// Formatter for CLI output
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Check if status messages are suppressed
    pub fn is_quiet(&self) -> bool {
        !self.config.shows_status()
    }

    /// Output a completion message
    pub fn success(&self, message: &str) {
        if self.is_quiet() {
            return;
        }
        println!("{message}");
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    /// Output a follow-up hint for an error
    pub fn hint(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_default() {
        let formatter = Formatter::default();
        assert!(!formatter.is_quiet());
    }

    #[test]
    fn test_formatter_quiet_mode() {
        let config = OutputConfig {
            quiet: true,
            ..Default::default()
        };
        assert!(Formatter::new(config).is_quiet());
    }

    #[test]
    fn test_formatter_debug_overrides_quiet() {
        let config = OutputConfig {
            quiet: true,
            debug: true,
            ..Default::default()
        };
        assert!(!Formatter::new(config).is_quiet());
    }
}
