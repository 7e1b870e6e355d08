//! Configuration management and validation.
//!
//! Provides the resolved settings for one run: which files to read, how
//! rows are tokenized, and where the two output artifacts are written.

use crate::constants::{COMMENT_PREFIX, DEFAULT_OUTPUT_FILE, ERROR_LOG_FILE, FIELD_DELIMITER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which input the run reads from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSelection {
    /// A single CSV file (`-i`)
    File(PathBuf),
    /// Every `.csv` file directly inside a directory (`-d`)
    Directory(PathBuf),
}

impl InputSelection {
    /// Path given on the command line
    pub fn path(&self) -> &Path {
        match self {
            InputSelection::File(path) | InputSelection::Directory(path) => path,
        }
    }
}

/// Row tokenization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Comment marker checked against the trimmed line
    pub comment_prefix: char,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
            comment_prefix: COMMENT_PREFIX,
        }
    }
}

/// Output artifact locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON database of accepted records
    pub json_path: PathBuf,

    /// Error log, always a sibling of `json_path`
    pub errors_path: PathBuf,
}

impl OutputConfig {
    /// Derive both output paths from an optional JSON path override
    pub fn from_override(json_override: Option<PathBuf>) -> Self {
        let json_path = json_override.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
        let errors_path = json_path.with_file_name(ERROR_LOG_FILE);
        Self {
            json_path,
            errors_path,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_override(None)
    }
}

/// Complete settings for a processing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputSelection,
    pub output: OutputConfig,
    pub reader: ReaderConfig,
}

impl Config {
    /// Create a configuration with default reader settings
    pub fn new(input: InputSelection, json_override: Option<PathBuf>) -> Self {
        let config = Self {
            input,
            output: OutputConfig::from_override(json_override),
            reader: ReaderConfig::default(),
        };
        debug!("Resolved configuration: {:?}", config);
        config
    }

    /// Validate configuration against the filesystem
    ///
    /// Checks that the input exists with the kind that was asked for and
    /// that the JSON output directory exists. Output files themselves are
    /// created or truncated later.
    pub fn validate(&self) -> Result<()> {
        match &self.input {
            InputSelection::File(path) => {
                if !path.exists() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                if path.is_dir() {
                    return Err(Error::configuration(format!(
                        "Input path is a directory, use -d instead: {}",
                        path.display()
                    )));
                }
            }
            InputSelection::Directory(path) => {
                if !path.exists() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                if !path.is_dir() {
                    return Err(Error::configuration(format!(
                        "Input path is not a directory: {}",
                        path.display()
                    )));
                }
            }
        }

        if let Some(parent) = self.output.json_path.parent() {
            // An empty parent means the current directory
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_paths() {
        let output = OutputConfig::default();
        assert_eq!(output.json_path, PathBuf::from("db.json"));
        assert_eq!(output.errors_path, PathBuf::from("errors.txt"));
    }

    #[test]
    fn test_errors_path_is_sibling_of_override() {
        let output = OutputConfig::from_override(Some(PathBuf::from("out/flights.json")));
        assert_eq!(output.json_path, PathBuf::from("out/flights.json"));
        assert_eq!(output.errors_path, PathBuf::from("out/errors.txt"));
    }

    #[test]
    fn test_validate_accepts_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("db.csv");
        std::fs::write(&input, "").unwrap();

        let config = Config::new(
            InputSelection::File(input),
            Some(temp_dir.path().join("db.json")),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(
            InputSelection::File(temp_dir.path().join("missing.csv")),
            Some(temp_dir.path().join("db.json")),
        );

        match config.validate().unwrap_err() {
            Error::FileNotFound { path } => assert!(path.ends_with("missing.csv")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_kind_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("db.csv");
        std::fs::write(&file, "").unwrap();

        let as_dir = Config::new(
            InputSelection::Directory(file),
            Some(temp_dir.path().join("db.json")),
        );
        assert!(matches!(
            as_dir.validate(),
            Err(Error::Configuration { .. })
        ));

        let as_file = Config::new(
            InputSelection::File(temp_dir.path().to_path_buf()),
            Some(temp_dir.path().join("db.json")),
        );
        assert!(matches!(
            as_file.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(
            InputSelection::Directory(temp_dir.path().to_path_buf()),
            Some(temp_dir.path().join("nope").join("db.json")),
        );

        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }
}
