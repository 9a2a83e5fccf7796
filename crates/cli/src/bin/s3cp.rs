//! s3cp - Uploads or downloads a file from an S3 bucket, using scp conventions
//!
//! ```text
//! s3cp [--help] [--quiet] [--debug] [--region NAME] [--rr] <source> <destination>
//! ```

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = s3tools::commands::cp::run(std::env::args_os()).await;
    std::process::exit(exit_code.as_i32());
}
