//! # Hash Command — Read, Compute, Print
//!
//! Reads the configuration document from disk, runs the core pipeline, and
//! prints either the full header line or the bare 64-character key.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use sebkey_core::config_key_for_document;

/// Arguments for the Config Key computation.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// SEB configuration file obtained from the exam webpage.
    pub config_file: PathBuf,

    /// Print only the 64-character config key, without the header name.
    #[arg(long)]
    pub hash_only: bool,
}

/// Compute and print the Config Key for a configuration file.
///
/// Returns the process exit code.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let document = fs::read_to_string(&args.config_file)
        .with_context(|| format!("failed to read {}", args.config_file.display()))?;

    tracing::debug!(
        path = %args.config_file.display(),
        bytes = document.len(),
        "read configuration file"
    );

    let hash = config_key_for_document(&document).with_context(|| {
        format!(
            "failed to compute the config key for {}",
            args.config_file.display()
        )
    })?;

    tracing::info!(config_hash = %hash.config_hash, "computed configuration digest");

    if args.hash_only {
        println!("{}", hash.config_key);
    } else {
        println!("{}", hash.header_line());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"<plist><dict>
        <key>startURL</key><string>https://example.com/exam</string>
        <key>browserWindowAllowReload</key><true/>
    </dict></plist>"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn run_hash_on_valid_config() {
        let file = write_config(MINIMAL);
        let args = HashArgs {
            config_file: file.path().to_path_buf(),
            hash_only: false,
        };
        assert_eq!(run_hash(&args).unwrap(), 0);
    }

    #[test]
    fn run_hash_missing_file_fails_with_path_in_context() {
        let args = HashArgs {
            config_file: PathBuf::from("/nonexistent/config.seb"),
            hash_only: false,
        };
        let err = run_hash(&args).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/config.seb"));
    }

    #[test]
    fn run_hash_malformed_document_fails() {
        let file = write_config("<plist><dict></plist>");
        let args = HashArgs {
            config_file: file.path().to_path_buf(),
            hash_only: true,
        };
        let err = run_hash(&args).unwrap_err();
        assert!(format!("{err:#}").contains("malformed"));
    }

    #[test]
    fn run_hash_without_start_url_fails() {
        let file = write_config("<plist><dict><key>allowQuit</key><true/></dict></plist>");
        let args = HashArgs {
            config_file: file.path().to_path_buf(),
            hash_only: false,
        };
        let err = run_hash(&args).unwrap_err();
        assert!(format!("{err:#}").contains("startURL"));
    }
}
