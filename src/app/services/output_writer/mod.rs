//! Output artifacts for a processing run
//!
//! Writes the accepted records as a pretty-printed JSON array and the
//! rejections as a plain-text error log next to it. Both files are written
//! once, after every input file has been processed.

pub mod writer;

pub use writer::{OutputSummary, OutputWriter, render_error_log, render_json};
