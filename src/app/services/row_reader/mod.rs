//! Row reader for flight CSV files
//!
//! Turns raw file text into [`RawEntry`](crate::app::models::RawEntry) values,
//! one per meaningful line. Blank lines and lines whose trimmed text starts
//! with `#` are dropped here and never reach the validator.
//!
//! Each remaining line is tokenized on its own with the `csv` crate, so a
//! quoted field may contain the delimiter. Quoted fields spanning several
//! lines are not supported: the text is split into lines first.
//!
//! ## Usage
//!
//! ```rust
//! use flight_processor::app::services::row_reader::RowReader;
//! use flight_processor::config::ReaderConfig;
//!
//! # fn example() -> flight_processor::Result<()> {
//! let reader = RowReader::new(ReaderConfig::default());
//! let entries = reader.read_str("# header\nFL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100\n")?;
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].fields.len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod reader;

#[cfg(test)]
pub mod tests;

pub use reader::RowReader;
