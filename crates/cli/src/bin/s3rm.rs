//! s3rm - Removes an object from an S3 bucket
//!
//! ```text
//! s3rm [--help] [--quiet] [--debug] [--region NAME] <path>
//! ```

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = s3tools::commands::rm::run(std::env::args_os()).await;
    std::process::exit(exit_code.as_i32());
}
