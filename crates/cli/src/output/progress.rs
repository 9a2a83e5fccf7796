//! Progress bar for transfers
//!
//! Observes a transfer through the core `TransferProgress` trait. Downloads
//! with a known length get a byte bar, everything else a spinner.

use s3tools_core::TransferProgress;

use super::OutputConfig;

const BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})";
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} {bytes}";

/// Progress bar wrapper
///
/// In quiet or debug mode, or when disabled, progress is suppressed.
#[derive(Debug)]
pub struct ProgressBar {
    bar: Option<indicatif::ProgressBar>,
}

impl ProgressBar {
    /// Create a progress bar labelled with `message`
    pub fn new(config: &OutputConfig, message: &str) -> Self {
        let bar = config.shows_progress().then(|| {
            let bar = indicatif::ProgressBar::new(0);
            bar.set_message(message.to_string());
            bar
        });

        Self { bar }
    }

    /// Check if progress bar is visible
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}

impl TransferProgress for ProgressBar {
    fn begin(&self, total: Option<u64>) {
        let Some(bar) = &self.bar else {
            return;
        };

        match total {
            Some(total) => {
                bar.set_length(total);
                bar.set_style(
                    indicatif::ProgressStyle::default_bar()
                        .template(BAR_TEMPLATE)
                        .expect("valid template")
                        .progress_chars("#>-"),
                );
            }
            None => {
                bar.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template(SPINNER_TEMPLATE)
                        .expect("valid template"),
                );
                bar.enable_steady_tick(std::time::Duration::from_millis(100));
            }
        }
    }

    fn advance(&self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
