use std::path::Path;

use symptom_core::models::row::GeneratedRow;

use crate::error::ExportError;
use crate::paths::write_atomic;

/// Encode one header row followed by one record per row.
pub fn encode_csv(header: &[&str], rows: &[GeneratedRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

pub fn write_dataset_csv(
    path: &Path,
    header: &[&str],
    rows: &[GeneratedRow],
) -> Result<(), ExportError> {
    let bytes = encode_csv(header, rows)?;
    write_atomic(path, &bytes)
}
