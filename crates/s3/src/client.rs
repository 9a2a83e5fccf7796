//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s3tools-core.
//! Credentials come from the SDK's default provider chain; only the region
//! is chosen here.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use s3tools_core::{
    DeleteReceipt, Error, ObjectDownload, ObjectStore, PutOptions, PutReceipt, RemotePath, Result,
    StorageClass, UploadSource,
};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    region: String,
}

impl S3Client {
    /// Create a new S3 client bound to `region`
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        tracing::debug!(region, "created S3 client");

        Self {
            inner: aws_sdk_s3::Client::new(&config),
            region: region.to_string(),
        }
    }

    /// Wrap an already configured SDK client
    pub fn from_client(inner: aws_sdk_s3::Client, region: impl Into<String>) -> Self {
        Self {
            inner,
            region: region.into(),
        }
    }

    /// Region the client talks to
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Render an SDK error with its full cause chain
fn sdk_error<E: std::error::Error>(operation: &'static str, path: &RemotePath, err: E) -> Error {
    Error::remote(operation, path, DisplayErrorContext(&err))
}

fn storage_class(hint: StorageClass) -> Option<aws_sdk_s3::types::StorageClass> {
    hint.as_header_value()
        .map(aws_sdk_s3::types::StorageClass::from)
}

fn object_location(path: &RemotePath) -> String {
    format!("s3://{}/{}", path.bucket, path.key)
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn get_object(&self, path: &RemotePath) -> Result<ObjectDownload> {
        let response = self
            .inner
            .get_object()
            .bucket(&path.bucket)
            .key(&path.key)
            .send()
            .await
            .map_err(|e| sdk_error("download", path, e))?;

        let content_length = response
            .content_length()
            .and_then(|len| u64::try_from(len).ok());

        tracing::debug!(%path, ?content_length, "opened object for download");

        Ok(ObjectDownload {
            content_length,
            body: Box::pin(response.body.into_async_read()),
        })
    }

    async fn put_object(
        &self,
        path: &RemotePath,
        source: UploadSource,
        options: PutOptions,
    ) -> Result<PutReceipt> {
        let body = ByteStream::from_path(&source.path)
            .await
            .map_err(|e| Error::local_io(&source.path, std::io::Error::other(e)))?;

        let response = self
            .inner
            .put_object()
            .bucket(&path.bucket)
            .key(&path.key)
            .body(body)
            .set_content_type(options.content_type)
            .set_storage_class(storage_class(options.storage_class))
            .send()
            .await
            .map_err(|e| sdk_error("upload", path, e))?;

        Ok(PutReceipt {
            location: object_location(path),
            etag: response.e_tag().map(|etag| etag.trim_matches('"').to_string()),
            version_id: response.version_id().map(str::to_string),
        })
    }

    async fn delete_object(&self, path: &RemotePath) -> Result<DeleteReceipt> {
        let response = self
            .inner
            .delete_object()
            .bucket(&path.bucket)
            .key(&path.key)
            .send()
            .await
            .map_err(|e| sdk_error("remove", path, e))?;

        Ok(DeleteReceipt {
            version_id: response.version_id().map(str::to_string),
            delete_marker: response.delete_marker().unwrap_or(false),
        })
    }
}
