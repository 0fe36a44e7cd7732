//! Deterministic top-k selection over zone and slot counts.
//!
//! Both orderings are total: count descending, then zone id ascending
//! (byte-lexicographic), then hour ascending for slots. Distinct entries never
//! compare equal, so the ranked sequence is unique for any input.

use std::cmp::Ordering;

use crate::aggregate::{SlotCount, ZoneCount};

/// Default number of entries returned by the ranking queries.
pub const DEFAULT_TOP_K: usize = 10;

/// Ranking order for zones: busiest first, ties broken by zone id.
pub fn zone_order(a: &ZoneCount, b: &ZoneCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.zone.cmp(&b.zone))
}

/// Ranking order for slots: busiest first, ties broken by zone id then hour.
pub fn slot_order(a: &SlotCount, b: &SlotCount) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.zone.cmp(&b.zone))
        .then_with(|| a.hour.cmp(&b.hour))
}

/// Keep the first `k` items of `items` under `compare`, sorted.
///
/// Partitions around the k-th element before sorting, so only the kept prefix
/// is fully ordered. `k == 0` yields an empty vector; `k >= items.len()`
/// returns everything sorted.
pub fn top_k_by<T, F>(mut items: Vec<T>, k: usize, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    if k < items.len() {
        items.select_nth_unstable_by(k - 1, &mut compare);
        items.truncate(k);
    }
    items.sort_unstable_by(compare);
    items
}

pub fn top_zones(zones: impl IntoIterator<Item = ZoneCount>, k: usize) -> Vec<ZoneCount> {
    if k == 0 {
        return Vec::new();
    }
    top_k_by(zones.into_iter().collect(), k, zone_order)
}

pub fn top_slots(slots: impl IntoIterator<Item = SlotCount>, k: usize) -> Vec<SlotCount> {
    if k == 0 {
        return Vec::new();
    }
    top_k_by(slots.into_iter().collect(), k, slot_order)
}
