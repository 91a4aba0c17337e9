//! Artifact file naming and atomic writes.

use std::path::{Path, PathBuf};

use crate::error::ExportError;

pub const DATASET_CSV: &str = "symptom_dataset.csv";
pub const CODEBOOK_JSON: &str = "codebook.json";
pub const REPORT_JSON: &str = "validation_report.json";
pub const PREVIEW_TXT: &str = "examples_preview.txt";

/// The four artifact locations inside one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    dir: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn csv(&self) -> PathBuf {
        self.dir.join(DATASET_CSV)
    }

    pub fn codebook(&self) -> PathBuf {
        self.dir.join(CODEBOOK_JSON)
    }

    pub fn report(&self) -> PathBuf {
        self.dir.join(REPORT_JSON)
    }

    pub fn preview(&self) -> PathBuf {
        self.dir.join(PREVIEW_TXT)
    }

    pub fn ensure_dir(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

/// Write to a sibling temp file, then rename over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp_path = PathBuf::from(tmp);

    let written = std::fs::write(&tmp_path, bytes).and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(err) = written {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(())
}
