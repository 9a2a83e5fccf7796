//! s3tools-core: Core library for the s3cp and s3rm commands
//!
//! This crate provides:
//! - Remote path parsing (`s3:bucket:key`)
//! - Transfer planning and dispatch (upload vs download)
//! - The ObjectStore trait consumed by the dispatcher
//! - Configuration loading
//!
//! It is independent of any specific S3 SDK so the dispatcher can be tested
//! against a mock store.

pub mod config;
pub mod error;
pub mod path;
pub mod traits;
pub mod transfer;

pub use config::{Config, ConfigManager, Settings};
pub use error::{Error, Result};
pub use path::{RemotePath, is_remote_path, parse_remote_path};
pub use traits::{
    DeleteReceipt, NoProgress, ObjectBody, ObjectDownload, ObjectStore, PutOptions, PutReceipt,
    StorageClass, TransferProgress, UploadSource,
};
pub use transfer::{
    MAX_SINGLE_PUT_SIZE, Transfer, TransferReport, execute, plan_copy, plan_remove, remove,
};
