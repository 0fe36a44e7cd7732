//! Ranked report assembled from an ingested analyzer.

use serde::Serialize;
use trip_core::{SlotCount, TripAnalyzer, ZoneCount};

use crate::params::ReportParams;

/// The two ranked sections, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub top_zones: Vec<ZoneCount>,
    pub top_slots: Vec<SlotCount>,
}

impl Report {
    /// Run both ranking queries with the sizes from `params`.
    pub fn collect(analyzer: &TripAnalyzer, params: &ReportParams) -> Self {
        Self {
            top_zones: analyzer.top_zones(params.top_zones_k),
            top_slots: analyzer.top_busy_slots(params.top_slots_k),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top_zones.is_empty() && self.top_slots.is_empty()
    }
}
