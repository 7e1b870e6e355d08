//! Command implementations for the flight processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting and the final run summary.

use crate::app::models::RejectionReason;
use crate::app::services::batch_processor::{BatchProcessor, FileDiscovery, ProcessingStats};
use crate::app::services::output_writer::{OutputSummary, OutputWriter};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::DEFAULT_LOG_FILTER;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a complete run, for reporting
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Counters gathered while processing
    pub stats: ProcessingStats,
    /// Written output artifacts
    pub output: OutputSummary,
    /// Wall-clock time of the run
    pub processing_time: Duration,
}

/// Main command runner for the flight processor
///
/// This function orchestrates the entire workflow:
/// 1. Set up logging
/// 2. Resolve and validate configuration
/// 3. Process the input files and write the outputs
/// 4. Print the summary report
pub fn run(args: Args) -> Result<RunReport> {
    setup_logging()?;

    info!("Starting flight processor");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    let report = execute(&config)?;

    print_report(&report);
    Ok(report)
}

/// Run the pipeline for an already-resolved configuration
///
/// Outputs are only written after every input file has been read and
/// validated; a fatal error on any file leaves previous outputs untouched.
pub fn execute(config: &Config) -> Result<RunReport> {
    let start_time = Instant::now();

    config.validate()?;

    let mut discovery = FileDiscovery::new(config.input.clone());
    let files = discovery.discover()?;
    info!(
        "Processing {} file(s) from {} ({} other entries ignored)",
        files.len(),
        config.input.path().display(),
        discovery.ignored_count()
    );

    let progress_bar = create_progress_bar(files.len());
    let processor = BatchProcessor::new(config.reader.clone());

    let outcome = processor.process_files_with(&files, |file_stats| {
        progress_bar.set_message(file_stats.file_name.clone());
        progress_bar.inc(1);
    });
    progress_bar.finish_and_clear();
    let outcome = outcome?;

    let writer = OutputWriter::new(config.output.clone());
    let output = writer.write(&outcome.records, &outcome.rejections)?;

    Ok(RunReport {
        stats: outcome.stats,
        output,
        processing_time: start_time.elapsed(),
    })
}

/// Set up structured logging on stderr
///
/// The filter comes from `RUST_LOG` when set, otherwise only warnings from
/// this crate are shown.
fn setup_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized");
    Ok(())
}

/// Progress bar over input files, hidden for single-file runs
fn create_progress_bar(file_count: usize) -> ProgressBar {
    if file_count < 2 {
        return ProgressBar::hidden();
    }

    let progress_bar = ProgressBar::new(file_count as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    progress_bar.set_style(style);
    progress_bar
}

/// Format a byte count in human-readable units
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Build the human-readable summary lines
fn report_lines(report: &RunReport) -> Vec<String> {
    let stats = &report.stats;
    let mut lines = vec![
        format!("Files processed: {}", stats.files_processed),
        format!("Rows read: {}", stats.rows_read),
        format!(
            "Accepted: {} ({:.1}%)",
            stats.accepted,
            stats.acceptance_rate()
        ),
        format!("Rejected: {}", stats.rejected),
    ];

    for reason in RejectionReason::ALL {
        let count = stats.rejected_for(reason);
        if count > 0 {
            lines.push(format!("  {}: {}", reason, count));
        }
    }

    lines.push(format!(
        "JSON output: {} ({})",
        report.output.json_path.display(),
        format_size(report.output.json_bytes)
    ));
    lines.push(format!(
        "Error log: {} ({})",
        report.output.errors_path.display(),
        format_size(report.output.errors_bytes)
    ));
    lines.push(format!(
        "Processing time: {}",
        HumanDuration(report.processing_time)
    ));

    lines
}

/// Print the run summary to stdout
fn print_report(report: &RunReport) {
    println!("{}", "Flight processing complete".bright_green().bold());
    for line in report_lines(report) {
        println!("   {}", line);
    }

    if report.stats.rejected > 0 {
        println!(
            "{}",
            format!(
                "{} row(s) rejected, see {}",
                report.stats.rejected,
                report.output.errors_path.display()
            )
            .yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputSelection;
    use tempfile::TempDir;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
    }

    #[test]
    fn test_execute_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("db.csv");
        std::fs::write(
            &input,
            "FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100\nFL1,NYC,LAX,2024-01-01 10:00,2024-01-01 09:00,100\n",
        )
        .unwrap();

        let config = Config::new(
            InputSelection::File(input),
            Some(temp_dir.path().join("db.json")),
        );
        let report = execute(&config).unwrap();

        assert_eq!(report.stats.files_processed, 1);
        assert_eq!(report.stats.accepted, 1);
        assert_eq!(report.stats.rejected_for(RejectionReason::Chronology), 1);
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("errors.txt")).unwrap(),
            "db.csv: FL1,NYC,LAX,2024-01-01 10:00,2024-01-01 09:00,100 => arrival must be after departure\n"
        );
    }

    #[test]
    fn test_execute_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(
            InputSelection::File(temp_dir.path().join("missing.csv")),
            Some(temp_dir.path().join("db.json")),
        );

        assert!(execute(&config).is_err());
        assert!(!temp_dir.path().join("db.json").exists());
        assert!(!temp_dir.path().join("errors.txt").exists());
    }

    #[test]
    fn test_report_lines_list_only_seen_reasons() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("db.csv");
        std::fs::write(&input, "FL1,NYC\nAB,JFK,LHR,2024-03-01 08:30,2024-03-01 14:45,0\n")
            .unwrap();

        let config = Config::new(
            InputSelection::File(input),
            Some(temp_dir.path().join("db.json")),
        );
        let lines = report_lines(&execute(&config).unwrap());

        assert!(lines.contains(&"Rejected: 2".to_string()));
        assert!(lines.contains(&"  incorrect number of fields: 1".to_string()));
        assert!(lines.contains(&"  invalid price value: 1".to_string()));
        assert!(!lines.iter().any(|line| line.contains("invalid flight_id")));
    }
}
