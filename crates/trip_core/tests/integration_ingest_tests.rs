mod support;

use support::fixtures::{analyzer_for, write_csv};
use support::reference;
use trip_core::test_helpers::{synthetic_trips_csv, TripCsvBuilder, TRIP_HEADER};
use trip_core::TripAnalyzer;

#[test]
fn header_only_file_yields_no_rankings() {
    let analyzer = analyzer_for(&format!("{TRIP_HEADER}\n"));
    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
}

#[test]
fn zero_byte_file_yields_no_rankings() {
    let analyzer = analyzer_for("");
    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
}

#[test]
fn single_row_counts_in_both_tables() {
    let csv = TripCsvBuilder::new()
        .line("1,Z1,Z2,2024-01-01 08:15,3.2,10.50")
        .build();
    let analyzer = analyzer_for(&csv);

    let zones = analyzer.top_zones(10);
    assert_eq!(zones.len(), 1);
    assert_eq!((zones[0].zone.as_str(), zones[0].count), ("Z1", 1));

    let slots = analyzer.top_busy_slots(10);
    assert_eq!(slots.len(), 1);
    assert_eq!(
        (slots[0].zone.as_str(), slots[0].hour, slots[0].count),
        ("Z1", 8, 1)
    );
}

#[test]
fn malformed_rows_are_skipped_without_aborting() {
    let csv = TripCsvBuilder::new()
        .trip("Z1", 8)
        .line("2,Z1,Z2,2024-01-01 25:15,3.2,10.50")
        .line("3,Z1,Z2")
        .line("4,,Z2,2024-01-01 10:00,3.2,10.50")
        .line("5,Z1,Z2,2024-01-01,3.2,10.50")
        .line("6,Z1,Z2,2024-01-01T10:00,3.2,10.50")
        .line("7,Z1,Z2,2024-01-01 ab:00,3.2,10.50")
        .trip("Z1", 9)
        .build();
    let analyzer = analyzer_for(&csv);

    assert_eq!(analyzer.table().zone_count("Z1"), 2);
    assert_eq!(analyzer.table().slot_count("Z1", 8), 1);
    assert_eq!(analyzer.table().slot_count("Z1", 9), 1);
    assert_eq!(analyzer.table().total_trips(), 2);
}

#[test]
fn distance_and_fare_are_not_validated() {
    let csv = TripCsvBuilder::new()
        .line("x,Z1,,2024-01-01 08:15,not-a-number,")
        .build();
    let analyzer = analyzer_for(&csv);
    assert_eq!(analyzer.table().zone_count("Z1"), 1);
}

#[test]
fn zone_totals_match_reference_parser() {
    let csv = synthetic_trips_csv(5_000, 37);
    let analyzer = analyzer_for(&csv);

    let expected_rows = reference::accepted_rows(&csv).len() as u64;
    assert_eq!(analyzer.table().total_trips(), expected_rows);

    for (zone, count) in reference::zone_totals(&csv) {
        assert_eq!(analyzer.table().zone_count(&zone), count, "zone {zone}");
    }
    for ((zone, hour), count) in reference::slot_totals(&csv) {
        assert_eq!(analyzer.table().slot_count(&zone, hour), count, "slot {zone}@{hour}");
    }
    assert_eq!(analyzer.table().len(), reference::zone_totals(&csv).len());
    assert_eq!(analyzer.table().slot_len(), reference::slot_totals(&csv).len());
}

#[test]
fn every_zone_total_equals_its_hourly_sum() {
    let analyzer = analyzer_for(&synthetic_trips_csv(2_000, 11));

    for zone in analyzer.top_zones(usize::MAX) {
        let hourly: u64 = (0..24u8)
            .map(|hour| analyzer.table().slot_count(&zone.zone, hour))
            .sum();
        assert_eq!(zone.count, hourly, "zone {}", zone.zone);
    }

    let slot_sum: u64 = analyzer
        .top_busy_slots(usize::MAX)
        .iter()
        .map(|slot| slot.count)
        .sum();
    assert_eq!(slot_sum, analyzer.table().total_trips());
}

#[test]
fn reingestion_reflects_only_latest_file() {
    let first = write_csv(&TripCsvBuilder::new().trips("ZA", 1, 3).build());
    let second = write_csv(&TripCsvBuilder::new().trips("ZB", 2, 2).build());

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(first.path());
    assert_eq!(analyzer.table().zone_count("ZA"), 3);

    analyzer.ingest_file(second.path());
    assert_eq!(analyzer.table().zone_count("ZA"), 0);
    assert_eq!(analyzer.table().zone_count("ZB"), 2);
    assert_eq!(analyzer.top_zones(10).len(), 1);
}

#[test]
fn missing_file_resets_previous_state() {
    let file = write_csv(&TripCsvBuilder::new().trip("ZA", 1).build());
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(file.path());
    assert!(!analyzer.table().is_empty());

    let missing = file.path().with_extension("missing");
    analyzer.ingest_file(&missing);
    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
}

#[test]
fn directory_path_degrades_to_empty() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(dir.path());
    assert!(analyzer.table().is_empty());
}

#[test]
fn independent_analyzers_do_not_share_state() {
    let mut a = analyzer_for(&TripCsvBuilder::new().trip("ZA", 1).build());
    let b = analyzer_for(&TripCsvBuilder::new().trip("ZB", 2).build());

    assert_eq!(a.table().zone_count("ZB"), 0);
    assert_eq!(b.table().zone_count("ZA"), 0);

    a.ingest_reader(TripCsvBuilder::new().build().as_bytes());
    assert_eq!(b.table().zone_count("ZB"), 1);
}
