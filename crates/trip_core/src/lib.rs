//! Pickup-zone analytics over trip CSV extracts.
//!
//! A [`TripAnalyzer`] ingests a CSV file of trip records once, counting trips
//! per pickup zone and per (zone, hour-of-day) slot, then answers two ranking
//! queries against those counts.
//!
//! ```no_run
//! use trip_core::{TripAnalyzer, DEFAULT_TOP_K};
//!
//! let mut analyzer = TripAnalyzer::new();
//! analyzer.ingest_file("trips.csv");
//!
//! for zone in analyzer.top_zones(DEFAULT_TOP_K) {
//!     println!("{},{}", zone.zone, zone.count);
//! }
//! for slot in analyzer.top_busy_slots(DEFAULT_TOP_K) {
//!     println!("{},{},{}", slot.zone, slot.hour, slot.count);
//! }
//! ```
//!
//! - [`row`]: per-line parsing and validation
//! - [`aggregate`]: zone and hourly counters
//! - [`ranking`]: deterministic top-k selection
//! - [`analyzer`]: ingestion driver and query surface

pub mod aggregate;
pub mod analyzer;
pub mod error;
pub mod ranking;
pub mod row;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use aggregate::{SlotCount, ZoneCount, ZoneTable};
pub use analyzer::TripAnalyzer;
pub use error::IngestError;
pub use ranking::DEFAULT_TOP_K;
pub use row::{parse_line, parse_record, RejectReason, RowOutcome, TripRow};
