use std::path::Path;

use symptom_core::models::report::ValidationReport;

use crate::error::ExportError;
use crate::paths::write_atomic;

pub fn write_report(path: &Path, report: &ValidationReport) -> Result<(), ExportError> {
    let json = serde_json::to_vec_pretty(report)?;
    write_atomic(path, &json)
}
