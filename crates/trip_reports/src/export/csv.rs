use std::io::Write;

use super::text::{SLOTS_SECTION, ZONES_SECTION};
use crate::report::Report;

pub(crate) fn export_to_csv_impl<W: Write>(
    report: &Report,
    out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["section", "rank", "zone", "hour", "count"])?;

    for (idx, zone) in report.top_zones.iter().enumerate() {
        let rank = (idx + 1).to_string();
        let count = zone.count.to_string();
        wtr.write_record([
            ZONES_SECTION,
            rank.as_str(),
            zone.zone.as_str(),
            "",
            count.as_str(),
        ])?;
    }

    for (idx, slot) in report.top_slots.iter().enumerate() {
        let rank = (idx + 1).to_string();
        let hour = slot.hour.to_string();
        let count = slot.count.to_string();
        wtr.write_record([
            SLOTS_SECTION,
            rank.as_str(),
            slot.zone.as_str(),
            hour.as_str(),
            count.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
