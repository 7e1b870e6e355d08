//! Command-line argument definitions for the flight processor
//!
//! This module defines the CLI interface using the clap derive API.
//! Exactly one of `-i` or `-d` must be given; clap enforces this through
//! the `source` argument group.

use crate::config::{Config, InputSelection};
use crate::{Error, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// CLI arguments for the flight record processor
///
/// Validates flight records from CSV files, writing the good ones to a JSON
/// database and the bad ones to an error log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-processor",
    version,
    about = "Validate flight records from CSV files into a JSON database and an error log",
    long_about = "Reads flight rows (flight_id, origin, destination, departure, arrival, price) \
                  from one CSV file or from every .csv file in a directory. Valid rows are \
                  written as a JSON array; invalid rows are listed in errors.txt next to it, \
                  each with the first rule it broke. Blank lines and lines starting with '#' \
                  are ignored."
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(false)
        .args(["input", "dir"])
))]
pub struct Args {
    /// Single CSV file to process
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "CSV file to process"
    )]
    pub input: Option<PathBuf>,

    /// Directory whose .csv files are processed in name order
    ///
    /// Only files directly inside the directory are read. The extension
    /// check ignores case, so `.CSV` files are included.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Directory of CSV files to process"
    )]
    pub dir: Option<PathBuf>,

    /// Path of the JSON output
    ///
    /// errors.txt is written in the same directory. Defaults to ./db.json.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "JSON output path (default: db.json)"
    )]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Resolve the input selection from `-i` / `-d`
    ///
    /// clap already rejects both-or-neither; this check covers `Args`
    /// values built by hand.
    pub fn input_selection(&self) -> Result<InputSelection> {
        match (&self.input, &self.dir) {
            (Some(file), None) => Ok(InputSelection::File(file.clone())),
            (None, Some(dir)) => Ok(InputSelection::Directory(dir.clone())),
            (Some(_), Some(_)) => Err(Error::configuration(
                "Options -i and -d are mutually exclusive",
            )),
            (None, None) => Err(Error::configuration(
                "One of -i <FILE> or -d <DIR> is required",
            )),
        }
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> Result<Config> {
        Ok(Config::new(self.input_selection()?, self.output.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_file_input() {
        let args = Args::try_parse_from(["flight-processor", "-i", "db.csv"]).unwrap();

        assert_eq!(args.input, Some(PathBuf::from("db.csv")));
        assert_eq!(args.dir, None);
        assert_eq!(args.output, None);
        assert_eq!(
            args.input_selection().unwrap(),
            InputSelection::File(PathBuf::from("db.csv"))
        );
    }

    #[test]
    fn test_parse_directory_with_output() {
        let args =
            Args::try_parse_from(["flight-processor", "-d", "data", "-o", "out/flights.json"])
                .unwrap();

        let config = args.to_config().unwrap();
        assert_eq!(
            config.input,
            InputSelection::Directory(PathBuf::from("data"))
        );
        assert_eq!(config.output.json_path, PathBuf::from("out/flights.json"));
        assert_eq!(config.output.errors_path, PathBuf::from("out/errors.txt"));
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "flight-processor",
            "--dir",
            "data",
            "--output",
            "db.json",
        ])
        .unwrap();

        assert_eq!(args.dir, Some(PathBuf::from("data")));
        assert_eq!(args.output, Some(PathBuf::from("db.json")));
    }

    #[test]
    fn test_input_and_dir_conflict() {
        let error = Args::try_parse_from(["flight-processor", "-i", "db.csv", "-d", "data"])
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_input_or_dir_required() {
        let error = Args::try_parse_from(["flight-processor", "-o", "db.json"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["flight-processor", "-i", "db.csv", "-v"]).is_err());
    }

    #[test]
    fn test_input_selection_for_hand_built_args() {
        let both = Args {
            input: Some(PathBuf::from("db.csv")),
            dir: Some(PathBuf::from("data")),
            output: None,
        };
        assert!(matches!(
            both.input_selection(),
            Err(Error::Configuration { .. })
        ));

        let neither = Args {
            input: None,
            dir: None,
            output: None,
        };
        assert!(matches!(
            neither.to_config(),
            Err(Error::Configuration { .. })
        ));
    }
}
