//! CSV adapter: catalog exports in, records out, and back again.
//!
//! The reader validates the structurally required columns up front; their
//! absence is the one hard failure the pipeline recognizes. Every other
//! column passes through untouched, in input order.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::record::{
    CN_FROM_PA, LC_CALL_NUMBER, LOCAL_CALL_NUMBER, PHYSICAL_AVAILABILITY, RankedRecord, Record,
    TITLE,
};
use crate::infra::io::create_output_with_bom;

/// Columns every export must carry before the pipeline will touch it.
pub const REQUIRED_COLUMNS: [&str; 4] =
    [TITLE, LOCAL_CALL_NUMBER, LC_CALL_NUMBER, PHYSICAL_AVAILABILITY];

/// Ingestion failures.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Missing expected column: {0}")]
    MissingColumn(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Parsed export: the original header order plus one record per row.
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Read an export from decoded text, validating required columns first.
pub fn read_records(text: &str) -> Result<Table, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(TableError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::default();
        for (index, name) in headers.iter().enumerate() {
            // Short rows read as empty cells
            let value = row.get(index).unwrap_or("").to_string();
            match name.as_str() {
                TITLE => record.title = value,
                LOCAL_CALL_NUMBER => record.local_call_number = value,
                LC_CALL_NUMBER => record.lc_call_number = value,
                PHYSICAL_AVAILABILITY => record.physical_availability = value,
                CN_FROM_PA => record.cn_from_pa = value,
                _ => {
                    record.extra.insert(name.clone(), value);
                }
            }
        }
        records.push(record);
    }
    debug!(rows = records.len(), "parsed catalog export");

    Ok(Table { headers, records })
}

/// Output header row: input columns plus `CNfromPA` (if not already
/// present) and, for ranked output, the rank field at the end.
fn output_headers(headers: &[String], rank_field: Option<&str>) -> Vec<String> {
    let mut out = headers.to_vec();
    if !out.iter().any(|h| h == CN_FROM_PA) {
        out.push(CN_FROM_PA.to_string());
    }
    if let Some(rank_field) = rank_field {
        out.push(rank_field.to_string());
    }
    out
}

fn record_row(record: &Record, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|name| record.field(name).unwrap_or("").to_string())
        .collect()
}

/// Write a cleaned export: original columns plus `CNfromPA`.
pub fn write_clean(path: &Path, headers: &[String], records: &[Record]) -> Result<()> {
    let out_headers = output_headers(headers, None);
    let file = create_output_with_bom(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(&out_headers).context("write header row")?;
    for record in records {
        writer
            .write_record(record_row(record, &out_headers))
            .context("write row")?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

/// Write a ranked export: cleaned columns plus the rank field.
///
/// Rows stay in ingestion order unless `sorted_by_rank` asks for
/// presentation in shelf order.
pub fn write_ranked(
    path: &Path,
    headers: &[String],
    ranked: &[RankedRecord],
    rank_field: &str,
    sorted_by_rank: bool,
) -> Result<()> {
    let out_headers = output_headers(headers, Some(rank_field));
    let file = create_output_with_bom(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(&out_headers).context("write header row")?;

    let mut rows: Vec<&RankedRecord> = ranked.iter().collect();
    if sorted_by_rank {
        rows.sort_by_key(|entry| entry.rank);
    }

    let value_headers = &out_headers[..out_headers.len() - 1];
    for entry in rows {
        let mut row = record_row(&entry.record, value_headers);
        row.push(entry.rank.to_string());
        writer.write_record(&row).context("write row")?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
