//! s3rm - Remove a single object from S3
//!
//! Requires `s3:DeleteObject` on the target bucket.

use std::ffi::OsString;

use clap::Parser;
use s3tools_core::{ObjectStore, RemotePath, plan_remove, transfer};
use s3tools_s3::S3Client;

use super::{GlobalArgs, load_settings, parse_args, report_error};
use crate::exit_code::ExitCode;
use crate::logging;
use crate::output::Formatter;

/// Removes an object from an S3 bucket
#[derive(Parser, Debug)]
#[command(name = "s3rm", version, long_about = None)]
#[command(after_help = "Example:\n  s3rm s3:mybucket:/myfolder/backup.tar.gz")]
pub struct RmArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The S3 object to delete, like s3:bucket:/path
    pub path: String,
}

/// Parse `args`, set up logging and run the remove
pub async fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: RmArgs = match parse_args(args) {
        Ok(args) => args,
        Err(code) => return code,
    };

    logging::init(&args.global.output_config());
    execute(args).await
}

/// Execute the rm command
pub async fn execute(args: RmArgs) -> ExitCode {
    tracing::debug!(?args, "got args");

    let formatter = Formatter::new(args.global.output_config());

    let settings = match load_settings(&args.global, false) {
        Ok(s) => s,
        Err(e) => return report_error(&formatter, &e),
    };

    let path = match plan_remove(&args.path) {
        Ok(p) => p,
        Err(e) => return report_error(&formatter, &e),
    };

    let client = S3Client::new(&settings.region).await;
    remove_with(&client, &path, &formatter).await
}

/// Remove `path` from `store` and report the outcome
pub async fn remove_with<S>(store: &S, path: &RemotePath, formatter: &Formatter) -> ExitCode
where
    S: ObjectStore + ?Sized,
{
    match transfer::remove(store, path).await {
        Ok(_) => {
            formatter.success(&format!("{path} removed"));
            ExitCode::Success
        }
        Err(e) => report_error(formatter, &e),
    }
}
