use std::io::Write;

use crate::report::Report;

pub(crate) fn export_to_json_impl<W: Write>(
    report: &Report,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
