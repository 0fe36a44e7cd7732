//! Report configuration.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use trip_core::DEFAULT_TOP_K;

/// Output encoding for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `TOP_ZONES` / `TOP_SLOTS` sections of comma-separated lines
    #[default]
    Text,
    /// One CSV table with a `section` column
    Csv,
    /// Pretty-printed JSON object
    Json,
    /// Parquet file (requires an output path)
    Parquet,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Parquet => "parquet",
        }
    }
}

/// Parameters for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParams {
    /// Trip CSV to ingest.
    pub input: PathBuf,
    /// Number of zones in the `TOP_ZONES` section.
    pub top_zones_k: usize,
    /// Number of slots in the `TOP_SLOTS` section.
    pub top_slots_k: usize,
    pub format: OutputFormat,
    /// Destination file; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Print per-phase wall-clock timings to stderr.
    pub show_timings: bool,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from("trips.csv"),
            top_zones_k: DEFAULT_TOP_K,
            top_slots_k: DEFAULT_TOP_K,
            format: OutputFormat::default(),
            output: None,
            show_timings: false,
        }
    }
}

impl ReportParams {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_top_zones(mut self, k: usize) -> Self {
        self.top_zones_k = k;
        self
    }

    pub fn with_top_slots(mut self, k: usize) -> Self {
        self.top_slots_k = k;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_timings(mut self, show: bool) -> Self {
        self.show_timings = show;
        self
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Check combinations the writers cannot honor.
    pub fn validate(&self) -> Result<(), String> {
        if self.format == OutputFormat::Parquet && self.output.is_none() {
            return Err("parquet output requires an output file path".to_string());
        }
        Ok(())
    }
}

/// Map a signed requested count to a ranking size; anything below 1 means
/// "no entries".
pub fn clamp_k(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_top_ten() {
        let params = ReportParams::new("in.csv");
        assert_eq!(params.top_zones_k, 10);
        assert_eq!(params.top_slots_k, 10);
        assert_eq!(params.format, OutputFormat::Text);
        assert!(params.output_path().is_none());
    }

    #[test]
    fn test_builder_overrides_fields() {
        let params = ReportParams::new("in.csv")
            .with_top_zones(3)
            .with_top_slots(0)
            .with_format(OutputFormat::Json)
            .with_output("out.json")
            .with_timings(true);

        assert_eq!(params.top_zones_k, 3);
        assert_eq!(params.top_slots_k, 0);
        assert_eq!(params.output_path(), Some(Path::new("out.json")));
        assert!(params.show_timings);
    }

    #[test]
    fn test_negative_and_zero_k_clamp_to_zero() {
        assert_eq!(clamp_k(-1), 0);
        assert_eq!(clamp_k(i64::MIN), 0);
        assert_eq!(clamp_k(0), 0);
        assert_eq!(clamp_k(25), 25);
    }

    #[test]
    fn test_parquet_needs_a_file() {
        let params = ReportParams::new("in.csv").with_format(OutputFormat::Parquet);
        assert!(params.validate().is_err());
        assert!(params.with_output("out.parquet").validate().is_ok());
    }
}
