//! The trip analyzer: one ingestion pass, then read-only ranking queries.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord, Terminator};
use tracing::{debug, info, trace, warn};

use crate::aggregate::{SlotCount, ZoneCount, ZoneTable};
use crate::error::{IngestError, Result};
use crate::ranking;
use crate::row::{parse_record, RejectReason, RejectTally, RowOutcome};

/// Counts gathered while scanning one input, used for log output.
#[derive(Debug, Default)]
struct ScanSummary {
    accepted: u64,
    rejected: RejectTally,
}

/// Aggregates trip rows by pickup zone and by (zone, hour) and ranks them.
///
/// Each instance owns its own counters. Ingesting replaces whatever a previous
/// ingestion produced; the ranking queries never modify state.
#[derive(Debug, Clone, Default)]
pub struct TripAnalyzer {
    table: ZoneTable,
}

impl TripAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the analyzer state with the trips found in the CSV file at `path`.
    ///
    /// Never fails: a missing or unreadable file leaves the analyzer empty,
    /// and malformed rows are skipped.
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.table.clear();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                let error = IngestError::Open {
                    path: path.to_path_buf(),
                    source,
                };
                warn!(%error, "input unreadable, analyzer left empty");
                return;
            }
        };

        info!(path = %path.display(), "ingesting trip file");
        self.ingest_reader(file);
    }

    /// Replace the analyzer state with the trips read from `reader`.
    ///
    /// The first line is treated as a header and skipped.
    pub fn ingest_reader<R: Read>(&mut self, reader: R) {
        self.table.clear();

        let mut summary = ScanSummary::default();
        if let Err(error) = scan(reader, &mut self.table, &mut summary) {
            warn!(%error, accepted = summary.accepted, "trip scan stopped early");
        }

        for (reason, count) in summary.rejected.iter() {
            debug!(reason = reason.label(), count, "rows rejected");
        }
        info!(
            accepted = summary.accepted,
            rejected = summary.rejected.total(),
            zones = self.table.len(),
            "trip ingestion finished"
        );
    }

    /// The `k` busiest pickup zones, by count descending then zone id ascending.
    pub fn top_zones(&self, k: usize) -> Vec<ZoneCount> {
        ranking::top_zones(self.table.zone_counts(), k)
    }

    /// The `k` busiest (zone, hour) slots, by count descending, zone id
    /// ascending, then hour ascending.
    pub fn top_busy_slots(&self, k: usize) -> Vec<SlotCount> {
        ranking::top_slots(self.table.slot_counts(), k)
    }

    /// Read-only view of the aggregated counters.
    pub fn table(&self) -> &ZoneTable {
        &self.table
    }
}

/// Discard the first physical line, whatever it holds (blank, unparsable or
/// not UTF-8).
fn skip_header<R: BufRead>(reader: &mut R) -> Result<()> {
    let mut header = Vec::new();
    reader
        .read_until(b'\n', &mut header)
        .map_err(IngestError::Header)?;
    trace!(bytes = header.len(), "header line skipped");
    Ok(())
}

fn scan<R: Read>(reader: R, table: &mut ZoneTable, summary: &mut ScanSummary) -> Result<()> {
    let mut reader = BufReader::new(reader);
    skip_header(&mut reader)?;

    // Rows end at `\n` only; a stray `\r` stays inside its field.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(reader);

    let mut record = StringRecord::new();
    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) if matches!(error.kind(), ErrorKind::Utf8 { .. }) => {
                trace!(%error, "row rejected");
                summary.rejected.record(RejectReason::InvalidEncoding);
                continue;
            }
            Err(error) => return Err(IngestError::from(error)),
        }

        match parse_record(&record) {
            RowOutcome::Accepted(row) => {
                table.record(row);
                summary.accepted += 1;
            }
            RowOutcome::Rejected(reason) => {
                trace!(
                    line = record.position().map(|pos| pos.line() + 1),
                    %reason,
                    "row rejected"
                );
                summary.rejected.record(reason);
            }
        }
    }
    Ok(())
}
