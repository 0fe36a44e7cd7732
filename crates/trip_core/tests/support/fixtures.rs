use std::io::Write;

use tempfile::NamedTempFile;
use trip_core::TripAnalyzer;

/// Write `contents` to a fresh temporary `.csv` file.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("trips_")
        .suffix(".csv")
        .tempfile()
        .expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("fixture should be written");
    file.flush().expect("fixture should flush");
    file
}

/// Ingest `contents` through a real file on disk.
pub fn analyzer_for(contents: &str) -> TripAnalyzer {
    let file = write_csv(contents);
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(file.path());
    analyzer
}
