use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt32Array, UInt64Array, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use super::text::{SLOTS_SECTION, ZONES_SECTION};
use crate::report::Report;

pub(crate) fn export_to_parquet_impl(
    report: &Report,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = build_record_batch(report)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn build_record_batch(report: &Report) -> Result<RecordBatch, arrow::error::ArrowError> {
    let schema = Arc::new(parquet_schema());
    let arrays = build_arrays(report);

    RecordBatch::try_new(schema, arrays)
}

fn parquet_schema() -> Schema {
    Schema::new(vec![
        Field::new("section", DataType::Utf8, false),
        Field::new("rank", DataType::UInt32, false),
        Field::new("zone", DataType::Utf8, false),
        Field::new("hour", DataType::UInt8, true),
        Field::new("count", DataType::UInt64, false),
    ])
}

fn build_arrays(report: &Report) -> Vec<ArrayRef> {
    let rows = report.top_zones.len() + report.top_slots.len();
    let mut section = Vec::with_capacity(rows);
    let mut rank = Vec::with_capacity(rows);
    let mut zone = Vec::with_capacity(rows);
    let mut hour = Vec::with_capacity(rows);
    let mut count = Vec::with_capacity(rows);

    for (idx, entry) in report.top_zones.iter().enumerate() {
        section.push(ZONES_SECTION);
        rank.push(idx as u32 + 1);
        zone.push(entry.zone.as_str());
        hour.push(None);
        count.push(entry.count);
    }
    for (idx, entry) in report.top_slots.iter().enumerate() {
        section.push(SLOTS_SECTION);
        rank.push(idx as u32 + 1);
        zone.push(entry.zone.as_str());
        hour.push(Some(entry.hour));
        count.push(entry.count);
    }

    vec![
        Arc::new(StringArray::from(section)),
        Arc::new(UInt32Array::from(rank)),
        Arc::new(StringArray::from(zone)),
        Arc::new(UInt8Array::from(hour)),
        Arc::new(UInt64Array::from(count)),
    ]
}
