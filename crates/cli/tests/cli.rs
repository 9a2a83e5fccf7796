//! Offline tests for the s3cp and s3rm binaries
//!
//! Everything here fails or exits before a request would be sent, so no S3
//! endpoint or credentials are needed.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run a binary with an isolated, empty config directory
fn run(binary: &str, args: &[&str], config_dir: &Path) -> Output {
    Command::new(binary)
        .args(args)
        .env("S3TOOLS_CONFIG_DIR", config_dir)
        .env_remove("S3TOOLS_REGION")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn s3cp(args: &[&str]) -> Output {
    let config_dir = TempDir::new().unwrap();
    run(env!("CARGO_BIN_EXE_s3cp"), args, config_dir.path())
}

fn s3rm(args: &[&str]) -> Output {
    let config_dir = TempDir::new().unwrap();
    run(env!("CARGO_BIN_EXE_s3rm"), args, config_dir.path())
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

mod copy_command {
    use super::*;

    #[test]
    fn test_help_exits_zero() {
        let output = s3cp(&["--help"]);
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("--rr"));
        assert!(stdout.contains("--region"));
        assert!(stdout.contains("s3:bucket:/folder/file.name"));
    }

    #[test]
    fn test_version_exits_zero() {
        let output = s3cp(&["--version"]);
        assert_eq!(output.status.code(), Some(0));
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(s3cp(&[]).status.code(), Some(1));
        assert_eq!(s3cp(&["/tmp/only-one"]).status.code(), Some(1));
    }

    #[test]
    fn test_unknown_flag() {
        let output = s3cp(&["--bogus", "/tmp/a", "s3:b:/a"]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_two_local_paths() {
        let output = s3cp(&["/tmp/a", "/tmp/b"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("two local paths"));
        assert!(stderr(&output).contains("--help"));
    }

    #[test]
    fn test_two_remote_paths() {
        let output = s3cp(&["s3:a:/x", "s3:b:/y"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("two remote paths"));
    }

    #[test]
    fn test_empty_bucket() {
        let output = s3cp(&["s3::/folder/file", "/tmp/file"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Invalid path"));
    }

    #[test]
    fn test_errors_print_in_quiet_mode() {
        let output = s3cp(&["--quiet", "/tmp/a", "/tmp/b"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).contains("error:"));
    }

    #[test]
    fn test_malformed_config_file() {
        let config_dir = TempDir::new().unwrap();
        std::fs::write(config_dir.path().join("config.toml"), "defaults = [").unwrap();

        let output = run(
            env!("CARGO_BIN_EXE_s3cp"),
            &["/tmp/a", "s3:b:/a"],
            config_dir.path(),
        );
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("TOML"));
    }
}

mod remove_command {
    use super::*;

    #[test]
    fn test_help_exits_zero() {
        let output = s3rm(&["--help"]);
        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stdout).contains("s3:bucket:/path"));
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(s3rm(&[]).status.code(), Some(1));
    }

    #[test]
    fn test_local_path_is_invalid() {
        let output = s3rm(&["/tmp/file"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Invalid path"));
    }

    #[test]
    fn test_empty_key_is_invalid() {
        let output = s3rm(&["s3:bucket:"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Invalid path"));
    }
}
