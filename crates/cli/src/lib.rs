//! s3tools CLI library
//!
//! Shared front end of the `s3cp` and `s3rm` binaries, exported for tests.

pub mod commands;
pub mod exit_code;
pub mod logging;
pub mod output;
