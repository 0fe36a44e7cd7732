//! Command-line reporting on top of `trip_core`.
//!
//! Ingests a trip CSV, ranks the busiest zones and (zone, hour) slots, and
//! writes the result as text, CSV, JSON or Parquet.
//!
//! # Quick Start
//!
//! ```no_run
//! use trip_reports::{run_report, OutputFormat, ReportParams};
//!
//! let params = ReportParams::new("trips.csv")
//!     .with_top_zones(5)
//!     .with_format(OutputFormat::Json)
//!     .with_output("top.json");
//! let outcome = run_report(&params).unwrap();
//! println!("ingest took {:?}", outcome.timings.get("ingest"));
//! ```
//!
//! - [`params`]: report configuration
//! - [`report`]: ranked sections pulled from an analyzer
//! - [`export`]: text/CSV/JSON/Parquet writers
//! - [`timing`]: per-phase wall-clock timing

pub mod export;
pub mod params;
pub mod report;
pub mod timing;

use tracing::info;
use trip_core::TripAnalyzer;

pub use export::{export_to_csv, export_to_json, export_to_parquet, write_report, write_text};
pub use params::{clamp_k, OutputFormat, ReportParams};
pub use report::Report;
pub use timing::PhaseTimings;

/// What a report run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub report: Report,
    pub timings: PhaseTimings,
}

/// Ingest `params.input`, rank it and write the report where `params` says.
///
/// An unreadable input is not an error: it yields a report with empty
/// sections. Only invalid parameters and output failures are returned.
///
/// # Errors
///
/// Returns an error if the parameters are inconsistent or the report cannot
/// be written.
pub fn run_report(params: &ReportParams) -> Result<ReportOutcome, Box<dyn std::error::Error>> {
    params.validate()?;

    let mut timings = PhaseTimings::new();
    let mut analyzer = TripAnalyzer::new();
    timings.time("ingest", || analyzer.ingest_file(&params.input));

    let report = timings.time("rank", || Report::collect(&analyzer, params));
    info!(
        zones = report.top_zones.len(),
        slots = report.top_slots.len(),
        "report ranked"
    );

    timings.time("export", || {
        write_report(&report, params.format, params.output_path())
    })?;

    Ok(ReportOutcome { report, timings })
}
