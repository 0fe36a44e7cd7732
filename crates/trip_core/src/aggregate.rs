//! Per-zone trip counters with hourly breakdown.

use std::collections::HashMap;

use serde::Serialize;

use crate::row::{TripRow, HOURS_PER_DAY};

/// Trip count for one pickup zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Trip count for one (zone, hour-of-day) slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

/// Counters for a single zone: running total plus 24 hourly buckets.
///
/// `total` always equals the sum of `hours`; both are only ever bumped
/// together through [`HourlyCounts::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyCounts {
    total: u64,
    hours: [u64; HOURS_PER_DAY],
}

impl HourlyCounts {
    fn record(&mut self, hour: u8) {
        self.hours[usize::from(hour)] += 1;
        self.total += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn hour(&self, hour: u8) -> u64 {
        self.hours.get(usize::from(hour)).copied().unwrap_or(0)
    }

    pub fn hours(&self) -> &[u64; HOURS_PER_DAY] {
        &self.hours
    }
}

/// Aggregate state built by ingestion: zone id -> hourly counters.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    zones: HashMap<String, HourlyCounts>,
}

impl ZoneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one accepted row in both the zone total and its hour bucket.
    pub fn record(&mut self, row: TripRow<'_>) {
        // Avoid allocating a key for zones already present.
        if let Some(counts) = self.zones.get_mut(row.zone) {
            counts.record(row.hour);
            return;
        }
        self.zones
            .entry(row.zone.to_owned())
            .or_default()
            .record(row.hour);
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Number of distinct zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Number of distinct (zone, hour) slots with a non-zero count.
    pub fn slot_len(&self) -> usize {
        self.zones
            .values()
            .map(|counts| counts.hours.iter().filter(|count| **count > 0).count())
            .sum()
    }

    /// Sum of all zone counts, i.e. the number of accepted rows.
    pub fn total_trips(&self) -> u64 {
        self.zones.values().map(HourlyCounts::total).sum()
    }

    pub fn get(&self, zone: &str) -> Option<&HourlyCounts> {
        self.zones.get(zone)
    }

    pub fn zone_count(&self, zone: &str) -> u64 {
        self.get(zone).map(HourlyCounts::total).unwrap_or(0)
    }

    pub fn slot_count(&self, zone: &str, hour: u8) -> u64 {
        self.get(zone).map(|counts| counts.hour(hour)).unwrap_or(0)
    }

    /// All zone totals, unordered.
    pub fn zone_counts(&self) -> impl Iterator<Item = ZoneCount> + '_ {
        self.zones.iter().map(|(zone, counts)| ZoneCount {
            zone: zone.clone(),
            count: counts.total,
        })
    }

    /// All non-empty slots, unordered.
    pub fn slot_counts(&self) -> impl Iterator<Item = SlotCount> + '_ {
        self.zones.iter().flat_map(|(zone, counts)| {
            counts
                .hours
                .iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(move |(hour, count)| SlotCount {
                    zone: zone.clone(),
                    hour: hour as u8,
                    count: *count,
                })
        })
    }
}
