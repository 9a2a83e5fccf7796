//! Transfer dispatch
//!
//! Decides whether a copy is an upload or a download by looking at which
//! side is a remote path, then hands the single object to an [`ObjectStore`].
//! Planning is pure; execution does the file and network I/O.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::error::{Error, Result};
use crate::path::{RemotePath, has_remote_prefix, parse_remote_path};
use crate::traits::{
    DeleteReceipt, ObjectBody, ObjectStore, PutOptions, PutReceipt, StorageClass,
    TransferProgress, UploadSource,
};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Largest object S3 accepts in a single PUT (5 GiB)
pub const MAX_SINGLE_PUT_SIZE: u64 = 5 * 1024 * 1024 * 1024;

/// A validated copy request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    /// Fetch a remote object into a local file or directory
    Download {
        source: RemotePath,
        destination: PathBuf,
    },
    /// Send a local file to a remote object
    Upload {
        source: PathBuf,
        destination: RemotePath,
        storage_class: StorageClass,
    },
}

impl Transfer {
    /// Short name of the direction, for logs
    pub fn direction(&self) -> &'static str {
        match self {
            Transfer::Download { .. } => "download",
            Transfer::Upload { .. } => "upload",
        }
    }
}

/// Outcome of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    /// Source as given or resolved
    pub source: String,

    /// Destination as resolved (derived file name or key included)
    pub destination: String,

    /// Bytes moved
    pub bytes: u64,

    /// Store receipt, uploads only
    pub receipt: Option<PutReceipt>,
}

/// Classify one side of a copy
///
/// Strings carrying the remote prefix must parse; anything else is local.
fn classify(path: &str) -> Result<Option<RemotePath>> {
    if path.is_empty() {
        return Err(Error::InvalidPath("Path cannot be empty".into()));
    }
    if has_remote_prefix(path) {
        parse_remote_path(path).map(Some)
    } else {
        Ok(None)
    }
}

/// Plan a copy from `source` to `destination`
///
/// Exactly one side must be a remote path. The storage class is only kept
/// for uploads.
pub fn plan_copy(source: &str, destination: &str, storage_class: StorageClass) -> Result<Transfer> {
    match (classify(source)?, classify(destination)?) {
        (Some(source), None) => Ok(Transfer::Download {
            source,
            destination: PathBuf::from(destination),
        }),
        (None, Some(remote)) => {
            let source = PathBuf::from(source);
            let destination = upload_destination(&source, remote)?;
            Ok(Transfer::Upload {
                source,
                destination,
                storage_class,
            })
        }
        (Some(_), Some(_)) => Err(Error::InvalidOperation(
            "Cannot copy between two remote paths; one side must be a local path".into(),
        )),
        (None, None) => Err(Error::InvalidOperation(
            "Cannot copy between two local paths; one side must be an s3:bucket:key path".into(),
        )),
    }
}

/// Plan a remove of `path`, which must be a remote path
pub fn plan_remove(path: &str) -> Result<RemotePath> {
    parse_remote_path(path)
}

/// A key ending in `/` names a folder: append the local file name
fn upload_destination(source: &Path, destination: RemotePath) -> Result<RemotePath> {
    if !destination.is_dir() {
        return Ok(destination);
    }

    let name = source.file_name().ok_or_else(|| {
        Error::InvalidPath(format!(
            "Cannot derive an object name from '{}'",
            source.display()
        ))
    })?;
    let key = format!("{}{}", destination.key, name.to_string_lossy());
    RemotePath::new(destination.bucket, key)
}

/// Resolve the local file a download writes to
///
/// A destination that is an existing directory, or that ends with a path
/// separator, receives the final segment of the key as file name.
async fn download_target(source: &RemotePath, destination: &Path) -> Result<PathBuf> {
    let is_dir = tokio::fs::metadata(destination)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    let ends_with_separator = destination
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator);

    if !is_dir && !ends_with_separator {
        return Ok(destination.to_path_buf());
    }

    match source.file_name() {
        Some(name) if name != "." && name != ".." => Ok(destination.join(name)),
        _ => Err(Error::InvalidPath(format!(
            "Cannot derive a file name from key '{}'; give a full destination file path",
            source.key
        ))),
    }
}

/// Run a planned transfer against `store`
pub async fn execute<S>(
    store: &S,
    transfer: &Transfer,
    progress: &dyn TransferProgress,
) -> Result<TransferReport>
where
    S: ObjectStore + ?Sized,
{
    tracing::debug!(direction = transfer.direction(), ?transfer, "starting transfer");

    let result = match transfer {
        Transfer::Download {
            source,
            destination,
        } => download(store, source, destination, progress).await,
        Transfer::Upload {
            source,
            destination,
            storage_class,
        } => upload(store, source, destination, *storage_class, progress).await,
    };

    progress.finish();
    result
}

async fn download<S>(
    store: &S,
    source: &RemotePath,
    destination: &Path,
    progress: &dyn TransferProgress,
) -> Result<TransferReport>
where
    S: ObjectStore + ?Sized,
{
    let target = download_target(source, destination).await?;
    let object = store.get_object(source).await?;

    let mut file = tokio::fs::File::create(&target)
        .await
        .map_err(|e| Error::local_io(&target, e))?;

    progress.begin(object.content_length);
    let written = write_body(object.body, &mut file, &target, source, progress).await;
    drop(file);

    let checked = written.and_then(|bytes| check_length(source, object.content_length, bytes));
    let bytes = match checked {
        Ok(bytes) => bytes,
        Err(e) => {
            if let Err(cleanup) = tokio::fs::remove_file(&target).await {
                tracing::warn!(
                    path = %target.display(),
                    error = %cleanup,
                    "could not remove partial download"
                );
            }
            return Err(e);
        }
    };

    tracing::debug!(%source, target = %target.display(), bytes, "download complete");

    Ok(TransferReport {
        source: source.to_string(),
        destination: target.display().to_string(),
        bytes,
        receipt: None,
    })
}

async fn write_body(
    mut body: ObjectBody,
    file: &mut tokio::fs::File,
    target: &Path,
    source: &RemotePath,
    progress: &dyn TransferProgress,
) -> Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut written = 0u64;

    loop {
        let n = body
            .read(&mut buf)
            .await
            .map_err(|e| Error::remote("download", source, e))?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .await
            .map_err(|e| Error::local_io(target, e))?;
        written += n as u64;
        progress.advance(n as u64);
    }

    file.flush().await.map_err(|e| Error::local_io(target, e))?;
    Ok(written)
}

fn check_length(source: &RemotePath, expected: Option<u64>, received: u64) -> Result<u64> {
    match expected {
        Some(expected) if expected != received => Err(Error::remote(
            "download",
            source,
            format!("expected {expected} bytes, received {received}"),
        )),
        _ => Ok(received),
    }
}

fn check_upload_size(source: &Path, len: u64) -> Result<()> {
    if len > MAX_SINGLE_PUT_SIZE {
        return Err(Error::InvalidOperation(format!(
            "'{}' is {len} bytes; uploads are limited to {MAX_SINGLE_PUT_SIZE} bytes",
            source.display()
        )));
    }
    Ok(())
}

async fn upload<S>(
    store: &S,
    source: &Path,
    destination: &RemotePath,
    storage_class: StorageClass,
    progress: &dyn TransferProgress,
) -> Result<TransferReport>
where
    S: ObjectStore + ?Sized,
{
    let metadata = {
        let file = tokio::fs::File::open(source)
            .await
            .map_err(|e| Error::local_io(source, e))?;
        file.metadata()
            .await
            .map_err(|e| Error::local_io(source, e))?
    };

    if metadata.is_dir() {
        return Err(Error::InvalidOperation(format!(
            "'{}' is a directory; only single files can be copied",
            source.display()
        )));
    }
    check_upload_size(source, metadata.len())?;

    let options = PutOptions {
        storage_class,
        content_type: mime_guess::from_path(source)
            .first()
            .map(|m| m.essence_str().to_string()),
    };
    let upload = UploadSource {
        path: source.to_path_buf(),
        len: metadata.len(),
    };

    progress.begin(None);
    let receipt = store.put_object(destination, upload, options).await?;
    progress.advance(metadata.len());

    tracing::debug!(
        %destination,
        location = %receipt.location,
        etag = ?receipt.etag,
        "post-upload object location"
    );

    Ok(TransferReport {
        source: source.display().to_string(),
        destination: destination.to_string(),
        bytes: metadata.len(),
        receipt: Some(receipt),
    })
}

/// Delete the object at `path`
pub async fn remove<S>(store: &S, path: &RemotePath) -> Result<DeleteReceipt>
where
    S: ObjectStore + ?Sized,
{
    let receipt = store.delete_object(path).await?;
    tracing::debug!(%path, ?receipt, "removed object");
    Ok(receipt)
}
