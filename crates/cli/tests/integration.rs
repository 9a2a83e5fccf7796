//! Integration tests for s3cp and s3rm
//!
//! These tests require a writable S3 bucket and credentials in the usual
//! AWS environment variables or profile.
//!
//! Run with:
//! ```bash
//! TEST_S3_BUCKET=my-scratch-bucket TEST_S3_REGION=us-east-1 \
//!     cargo test --features integration
//! ```

#![cfg(feature = "integration")]

use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

/// Get S3 test configuration from environment
fn get_test_config() -> Option<(String, String)> {
    let bucket = std::env::var("TEST_S3_BUCKET").ok()?;
    let region = std::env::var("TEST_S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    Some((bucket, region))
}

/// Run a binary with an isolated config directory
fn run(binary: &str, args: &[&str], config_dir: &std::path::Path) -> Output {
    Command::new(binary)
        .args(args)
        .env("S3TOOLS_CONFIG_DIR", config_dir)
        .output()
        .expect("Failed to execute command")
}

fn unique_key(name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("s3tools-test/{nanos}/{name}")
}

#[test]
fn test_upload_download_remove() {
    let Some((bucket, region)) = get_test_config() else {
        eprintln!("Skipping: TEST_S3_BUCKET not set");
        return;
    };
    let config_dir = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let source = work.path().join("upload.txt");
    std::fs::write(&source, b"hello from s3tools").unwrap();
    let remote = format!("s3:{bucket}:{}", unique_key("upload.txt"));

    let output = run(
        env!("CARGO_BIN_EXE_s3cp"),
        &["--region", &region, "--rr", source.to_str().unwrap(), &remote],
        config_dir.path(),
    );
    assert!(
        output.status.success(),
        "upload failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("transfer complete"));

    let download_dir = work.path().join("downloads");
    std::fs::create_dir(&download_dir).unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_s3cp"),
        &["--region", &region, "--quiet", &remote, download_dir.to_str().unwrap()],
        config_dir.path(),
    );
    assert!(
        output.status.success(),
        "download failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read(download_dir.join("upload.txt")).unwrap(),
        b"hello from s3tools"
    );

    let output = run(
        env!("CARGO_BIN_EXE_s3rm"),
        &["--region", &region, &remote],
        config_dir.path(),
    );
    assert!(
        output.status.success(),
        "remove failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("removed"));
}

#[test]
fn test_download_missing_object() {
    let Some((bucket, region)) = get_test_config() else {
        eprintln!("Skipping: TEST_S3_BUCKET not set");
        return;
    };
    let config_dir = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let target = work.path().join("missing.txt");

    let remote = format!("s3:{bucket}:{}", unique_key("missing.txt"));
    let output = run(
        env!("CARGO_BIN_EXE_s3cp"),
        &["--region", &region, &remote, target.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!target.exists());
}
