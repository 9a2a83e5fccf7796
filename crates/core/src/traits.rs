//! ObjectStore trait definition
//!
//! This trait is the whole contract the dispatcher needs from the storage
//! SDK: fetch, store and delete a single object. Chunking, retries and
//! credentials are the implementation's business.

use std::fmt;
use std::path::PathBuf;
use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::Result;
use crate::path::RemotePath;

/// Streaming object body
pub type ObjectBody = Pin<Box<dyn AsyncRead + Send>>;

/// Storage class requested for an upload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageClass {
    /// Whatever the bucket default is; nothing is sent
    #[default]
    Standard,
    /// Lower durability, lower cost
    ReducedRedundancy,
}

impl StorageClass {
    /// Pick the class from the `--rr` style flag
    pub fn from_reduced_redundancy(enabled: bool) -> Self {
        if enabled {
            Self::ReducedRedundancy
        } else {
            Self::Standard
        }
    }

    /// Wire name of the class, `None` when the default should be used
    pub fn as_header_value(self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::ReducedRedundancy => Some("REDUCED_REDUNDANCY"),
        }
    }
}

/// An object being downloaded
pub struct ObjectDownload {
    /// Size advertised by the store, if any
    pub content_length: Option<u64>,

    /// Object content
    pub body: ObjectBody,
}

impl fmt::Debug for ObjectDownload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectDownload")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// A local file checked for readability, ready to be uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSource {
    /// Local path of the file
    pub path: PathBuf,

    /// File size in bytes at the time it was opened
    pub len: u64,
}

/// Options for put operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutOptions {
    /// Storage class hint
    pub storage_class: StorageClass,

    /// Content type for the stored object
    pub content_type: Option<String>,
}

/// What the store reports after a successful put
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutReceipt {
    /// Location of the stored object
    pub location: String,

    /// ETag (usually MD5 for single-part uploads)
    pub etag: Option<String>,

    /// Version ID when the bucket is versioned
    pub version_id: Option<String>,
}

/// What the store reports after a successful delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReceipt {
    /// Version ID of the delete marker or removed version
    pub version_id: Option<String>,

    /// Whether a delete marker was created
    pub delete_marker: bool,
}

/// Trait for the single-object operations the commands need
///
/// Implemented by the S3 adapter and mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Open an object for reading
    async fn get_object(&self, path: &RemotePath) -> Result<ObjectDownload>;

    /// Store the content of a local file as an object
    async fn put_object(
        &self,
        path: &RemotePath,
        source: UploadSource,
        options: PutOptions,
    ) -> Result<PutReceipt>;

    /// Delete an object
    async fn delete_object(&self, path: &RemotePath) -> Result<DeleteReceipt>;
}

/// Observer for bytes moved by a transfer
///
/// All methods default to no-ops.
pub trait TransferProgress: Send + Sync {
    /// Transfer started; `total` is the expected size when known
    fn begin(&self, _total: Option<u64>) {}

    /// `bytes` more bytes were moved
    fn advance(&self, _bytes: u64) {}

    /// Transfer ended, successfully or not
    fn finish(&self) {}
}

/// Progress observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl TransferProgress for NoProgress {}
