//! CLI command definitions and execution
//!
//! `s3cp` and `s3rm` are separate binaries sharing the flags and plumbing
//! defined here.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Args, Parser};
use s3tools_core::{ConfigManager, Error, Settings};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

pub mod cp;
pub mod rm;

#[cfg(test)]
mod test_support;

/// Flags shared by both commands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Suppress output
    #[arg(long)]
    pub quiet: bool,

    /// Print debug information; overrides --quiet
    #[arg(long)]
    pub debug: bool,

    /// AWS region of the target bucket [default: us-east-1]
    #[arg(long, env = "S3TOOLS_REGION", value_name = "NAME")]
    pub region: Option<String>,
}

impl GlobalArgs {
    /// Output configuration for these flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            quiet: self.quiet,
            debug: self.debug,
            no_progress: false,
        }
    }
}

/// Parse command-line arguments
///
/// Help and version requests print and yield `Success`; any other parse
/// failure prints the clap error and yields `Failure`.
pub fn parse_args<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|e| {
        let _ = e.print();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
            _ => ExitCode::Failure,
        }
    })
}

/// Load the config file and merge command-line values over it
pub fn load_settings(
    global: &GlobalArgs,
    reduced_redundancy: bool,
) -> s3tools_core::Result<Settings> {
    let config = ConfigManager::new()?.load()?;
    Ok(Settings::resolve(
        &config,
        global.region.as_deref(),
        reduced_redundancy,
    ))
}

/// Print an error and map it to an exit code
pub fn report_error(formatter: &Formatter, err: &Error) -> ExitCode {
    tracing::debug!(error = ?err, "command failed");
    formatter.error(&err.to_string());
    if err.is_usage() {
        formatter.hint("Run with --help for usage.");
    }
    ExitCode::from(err)
}
