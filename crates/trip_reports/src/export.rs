//! Report rendering and export.
//!
//! The text format is the canonical `TOP_ZONES` / `TOP_SLOTS` listing; CSV,
//! JSON and Parquet carry the same ranked rows for downstream tooling.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::params::OutputFormat;
use crate::report::Report;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/parquet.rs"]
mod parquet;
#[path = "export/text.rs"]
mod text;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Write the report as `TOP_ZONES` then `TOP_SLOTS` sections.
///
/// Zone lines are `zone,count`; slot lines are `zone,hour,count`, both in
/// ranked order.
pub fn write_text<W: Write>(report: &Report, out: W) -> Result<(), Box<dyn std::error::Error>> {
    text::write_text_impl(report, out)
}

/// Write the report as one CSV table with columns
/// `section,rank,zone,hour,count` (`hour` empty for zone rows).
pub fn export_to_csv<W: Write>(
    report: &Report,
    out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    csv::export_to_csv_impl(report, out)
}

/// Write the report as a pretty-printed JSON object with `top_zones` and
/// `top_slots` arrays.
pub fn export_to_json<W: Write>(
    report: &Report,
    out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    json::export_to_json_impl(report, out)
}

/// Export the report to a Parquet file.
///
/// # Errors
///
/// Returns an error if file creation or Parquet writing fails.
pub fn export_to_parquet(
    report: &Report,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    parquet::export_to_parquet_impl(report, file)
}

/// Write the report in `format` to `path`, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the destination cannot be created or written, or if
/// Parquet output is requested without a path.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let destination = path.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    debug!(
        format = format.as_str(),
        %destination,
        zones = report.top_zones.len(),
        slots = report.top_slots.len(),
        "writing report"
    );

    match format {
        OutputFormat::Parquet => {
            let path = path.ok_or("parquet output requires an output file path")?;
            export_to_parquet(report, path)
        }
        OutputFormat::Text => write_text(report, writer_utils::open_sink(path)?),
        OutputFormat::Csv => export_to_csv(report, writer_utils::open_sink(path)?),
        OutputFormat::Json => export_to_json(report, writer_utils::open_sink(path)?),
    }
}
