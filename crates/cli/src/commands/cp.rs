//! s3cp - Copy a single file to or from S3
//!
//! Exactly one of the two paths is remote; that side decides whether the
//! file is uploaded or downloaded.

use std::ffi::OsString;

use clap::Parser;
use s3tools_core::{ObjectStore, StorageClass, Transfer, plan_copy, transfer};
use s3tools_s3::S3Client;

use super::{GlobalArgs, load_settings, parse_args, report_error};
use crate::exit_code::ExitCode;
use crate::logging;
use crate::output::{Formatter, OutputConfig, ProgressBar};

/// Uploads or downloads a file from an S3 bucket, using scp conventions
#[derive(Parser, Debug)]
#[command(name = "s3cp", version, long_about = None)]
#[command(after_help = "\
Remote paths look like s3:bucket:/folder/file.name; anything else is a local path.
Exactly one of SOURCE and DESTINATION must be remote.

Examples:
  s3cp s3:mybucket:/myfolder/backup.tar.gz /tmp
  s3cp s3:mybucket:/myfolder/backup.tar.gz /tmp/foobar.tar.gz
  s3cp --rr /tmp/backup.tar.gz s3:mybucket:/myfolder/")]
pub struct CpArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Upload with the reduced redundancy storage class; no effect on download
    #[arg(long = "rr")]
    pub reduced_redundancy: bool,

    /// Source of the copy: a local file path or s3:bucket:/path
    pub source: String,

    /// Destination of the copy, in the same format as the source
    pub destination: String,
}

/// Parse `args`, set up logging and run the copy
pub async fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: CpArgs = match parse_args(args) {
        Ok(args) => args,
        Err(code) => return code,
    };

    logging::init(&args.global.output_config());
    execute(args).await
}

/// Execute the cp command
pub async fn execute(args: CpArgs) -> ExitCode {
    tracing::debug!(?args, "got args");

    let mut output_config = args.global.output_config();
    let formatter = Formatter::new(output_config.clone());

    let settings = match load_settings(&args.global, args.reduced_redundancy) {
        Ok(s) => s,
        Err(e) => return report_error(&formatter, &e),
    };
    output_config.no_progress = !settings.progress;

    let plan = match plan_copy(
        &args.source,
        &args.destination,
        StorageClass::from_reduced_redundancy(settings.reduced_redundancy),
    ) {
        Ok(plan) => plan,
        Err(e) => return report_error(&formatter, &e),
    };

    let client = S3Client::new(&settings.region).await;
    copy_with(&client, &plan, &formatter, &output_config).await
}

/// Run a planned copy against `store` and report the outcome
pub async fn copy_with<S>(
    store: &S,
    plan: &Transfer,
    formatter: &Formatter,
    output_config: &OutputConfig,
) -> ExitCode
where
    S: ObjectStore + ?Sized,
{
    let progress = ProgressBar::new(output_config, plan.direction());

    match transfer::execute(store, plan, &progress).await {
        Ok(report) => {
            formatter.success(&format!(
                "{} -> {} : transfer complete ({})",
                report.source,
                report.destination,
                humansize::format_size(report.bytes, humansize::BINARY)
            ));
            ExitCode::Success
        }
        Err(e) => report_error(formatter, &e),
    }
}
