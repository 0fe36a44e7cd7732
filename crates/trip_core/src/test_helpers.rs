//! Test helpers for building trip CSV fixtures.
//!
//! Shared by unit tests, integration tests and benchmarks so they all write
//! rows in the same column layout.

use std::fmt::Write as _;

/// Column header used by trip extracts.
pub const TRIP_HEADER: &str =
    "TripID,PickupZoneID,DropoffZoneID,PickupDateTime,DistanceKm,FareAmount";

/// Format one well-formed trip line.
pub fn trip_line(trip_id: u64, zone: &str, hour: u8) -> String {
    format!("{trip_id},{zone},D{trip_id},2024-01-01 {hour:02}:15,3.2,10.50")
}

/// Builder for trip CSV contents.
#[derive(Debug, Clone)]
pub struct TripCsvBuilder {
    contents: String,
    next_id: u64,
}

impl Default for TripCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TripCsvBuilder {
    /// Start a fixture with the standard header line.
    pub fn new() -> Self {
        let mut contents = String::with_capacity(TRIP_HEADER.len() + 1);
        contents.push_str(TRIP_HEADER);
        contents.push('\n');
        Self {
            contents,
            next_id: 1,
        }
    }

    /// Append a valid trip for `zone` at `hour`.
    pub fn trip(mut self, zone: &str, hour: u8) -> Self {
        let line = trip_line(self.next_id, zone, hour);
        self.next_id += 1;
        self.line(&line)
    }

    /// Append `count` valid trips for `zone` at `hour`.
    pub fn trips(mut self, zone: &str, hour: u8, count: usize) -> Self {
        for _ in 0..count {
            self = self.trip(zone, hour);
        }
        self
    }

    /// Append an arbitrary raw line.
    pub fn line(mut self, line: &str) -> Self {
        let _ = writeln!(self.contents, "{line}");
        self
    }

    pub fn build(self) -> String {
        self.contents
    }
}

/// A deterministic synthetic extract with `rows` lines, roughly one in
/// twenty malformed, spread over `zones` zones.
pub fn synthetic_trips_csv(rows: usize, zones: usize) -> String {
    let zones = zones.max(1);
    let mut builder = TripCsvBuilder::new();
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for i in 0..rows {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let zone = format!("Z{:03}", state as usize % zones);
        let hour = ((state >> 32) % 24) as u8;
        builder = if i % 20 == 19 {
            builder.line(&format!("{i},{zone},D,2024-01-01 {}:00,1.0,5.0", 24 + hour))
        } else {
            builder.trip(&zone, hour)
        };
    }
    builder.build()
}
