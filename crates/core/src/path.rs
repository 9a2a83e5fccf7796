//! Path parsing
//!
//! Remote paths have the format `s3:<bucket>:<key>`. Anything else is a local
//! filesystem path and is passed through as-is.

use std::fmt;

use crate::error::{Error, Result};

/// Marker that starts every remote path
pub const REMOTE_PREFIX: &str = "s3";

/// Separator between prefix, bucket and key
pub const DELIMITER: char = ':';

/// A parsed remote path pointing to an S3 object
///
/// Both fields are non-empty and `bucket` never contains the delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemotePath {
    /// Bucket name
    pub bucket: String,
    /// Object key, used verbatim (a leading `/` is part of the key)
    pub key: String,
}

impl RemotePath {
    /// Create a RemotePath from already validated parts
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let bucket = bucket.into();
        let key = key.into();

        if bucket.is_empty() || bucket.contains(DELIMITER) {
            return Err(Error::InvalidPath(format!(
                "Bucket name '{bucket}' must be non-empty and must not contain '{DELIMITER}'"
            )));
        }
        if key.is_empty() {
            return Err(Error::InvalidPath("Object key cannot be empty".into()));
        }

        Ok(Self { bucket, key })
    }

    /// Whether the key names a folder rather than an object
    pub fn is_dir(&self) -> bool {
        self.key.ends_with('/')
    }

    /// Final `/`-separated segment of the key, if there is one
    pub fn file_name(&self) -> Option<&str> {
        self.key.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the path in `s3:<bucket>:<key>` form
    pub fn to_full_path(&self) -> String {
        format!("{REMOTE_PREFIX}{DELIMITER}{}{DELIMITER}{}", self.bucket, self.key)
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_full_path())
    }
}

impl std::str::FromStr for RemotePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_remote_path(s)
    }
}

/// Parse a path string of the form `s3:<bucket>:<key>`
///
/// Fails with [`Error::InvalidPath`] when the prefix or the second delimiter
/// is missing, or when either the bucket or the key is empty.
pub fn parse_remote_path(path: &str) -> Result<RemotePath> {
    let invalid = || {
        Error::InvalidPath(format!(
            "'{path}' must be in the form {REMOTE_PREFIX}{DELIMITER}bucket{DELIMITER}/path/to/file"
        ))
    };

    let rest = strip_remote_prefix(path).ok_or_else(invalid)?;
    let (bucket, key) = rest.split_once(DELIMITER).ok_or_else(invalid)?;
    if bucket.is_empty() || key.is_empty() {
        return Err(invalid());
    }

    Ok(RemotePath {
        bucket: bucket.to_string(),
        key: key.to_string(),
    })
}

/// Returns true if `path` is a valid remote path
pub fn is_remote_path(path: &str) -> bool {
    parse_remote_path(path).is_ok()
}

/// Returns true if `path` carries the remote prefix, valid or not
///
/// Used to report malformed remote paths instead of mistaking them for local
/// file names.
pub fn has_remote_prefix(path: &str) -> bool {
    strip_remote_prefix(path).is_some()
}

fn strip_remote_prefix(path: &str) -> Option<&str> {
    path.strip_prefix(REMOTE_PREFIX)?.strip_prefix(DELIMITER)
}
