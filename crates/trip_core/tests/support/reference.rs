use std::collections::BTreeMap;

/// Independent re-implementation of the row rules, used to cross-check
/// ingestion counts. Returns (zone, hour) for every row that should count.
pub fn accepted_rows(csv: &str) -> Vec<(String, u8)> {
    csv.lines()
        .skip(1)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 6 || fields[1].is_empty() {
                return None;
            }
            let pickup = fields[3];
            if pickup.len() < 16 || pickup.get(10..11) != Some(" ") {
                return None;
            }
            let digits = pickup.get(11..13)?;
            if !digits.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let hour: u8 = digits.parse().ok()?;
            (hour < 24).then(|| (fields[1].to_string(), hour))
        })
        .collect()
}

/// Reference zone totals keyed by zone.
pub fn zone_totals(csv: &str) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for (zone, _) in accepted_rows(csv) {
        *totals.entry(zone).or_insert(0) += 1;
    }
    totals
}

/// Reference slot totals keyed by (zone, hour).
pub fn slot_totals(csv: &str) -> BTreeMap<(String, u8), u64> {
    let mut totals = BTreeMap::new();
    for row in accepted_rows(csv) {
        *totals.entry(row).or_insert(0) += 1;
    }
    totals
}
