//! symptom-export
//!
//! Batch artifact sinks: the CSV table, the JSON codebook, the JSON
//! validation report, and the plain-text preview.

pub mod codebook;
pub mod error;
pub mod paths;
pub mod preview;
pub mod report;
pub mod table;

use symptom_core::Domain;
use symptom_synth::Validated;

use crate::error::ExportError;
use crate::paths::OutputPaths;

/// Write all four artifacts for a validated batch.
pub fn export_all(
    paths: &OutputPaths,
    domain: &Domain,
    header: &[&str],
    validated: &Validated,
) -> Result<(), ExportError> {
    paths.ensure_dir()?;
    table::write_dataset_csv(&paths.csv(), header, &validated.valid_rows)?;
    codebook::write_codebook(&paths.codebook(), &codebook::Codebook::from_domain(domain))?;
    report::write_report(&paths.report(), &validated.report)?;
    preview::write_preview(&paths.preview(), &validated.valid_rows)?;

    tracing::info!(
        dir = %paths.dir().display(),
        rows = validated.valid_rows.len(),
        "artifacts written"
    );
    Ok(())
}
