use std::io::Write;

use crate::report::Report;

pub(crate) const ZONES_SECTION: &str = "TOP_ZONES";
pub(crate) const SLOTS_SECTION: &str = "TOP_SLOTS";

pub(crate) fn write_text_impl<W: Write>(
    report: &Report,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "{ZONES_SECTION}")?;
    for zone in &report.top_zones {
        writeln!(out, "{},{}", zone.zone, zone.count)?;
    }

    writeln!(out, "{SLOTS_SECTION}")?;
    for slot in &report.top_slots {
        writeln!(out, "{},{},{}", slot.zone, slot.hour, slot.count)?;
    }

    out.flush()?;
    Ok(())
}
