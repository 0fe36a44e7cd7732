//! Error types for trip ingestion.
//!
//! None of these reach callers of [`TripAnalyzer::ingest_file`](crate::TripAnalyzer::ingest_file):
//! an unreadable input degrades to an empty analyzer and a read failure
//! mid-file keeps whatever was counted before it. They exist so the scan can
//! use `?` and so the degrade decision is logged with its cause.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// Input file missing or not readable
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure while consuming the header line
    #[error("failed reading header line: {0}")]
    Header(#[source] io::Error),

    /// I/O failure while reading rows
    #[error("failed reading trip rows: {0}")]
    Read(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
