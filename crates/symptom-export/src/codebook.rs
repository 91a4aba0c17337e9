use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use symptom_core::Domain;

use crate::error::ExportError;
use crate::paths::write_atomic;

/// Code → display text for every condition, specialty, and question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codebook {
    pub conditions: BTreeMap<String, String>,
    pub specialties: BTreeMap<String, String>,
    pub questions: BTreeMap<String, String>,
}

impl Codebook {
    pub fn from_domain(domain: &Domain) -> Self {
        Self {
            conditions: domain
                .conditions()
                .iter()
                .map(|c| (c.code.clone(), c.name.clone()))
                .collect(),
            specialties: domain
                .specialties()
                .iter()
                .map(|s| (s.code.clone(), s.title.clone()))
                .collect(),
            questions: domain
                .questions()
                .iter()
                .map(|q| (q.id.clone(), q.label.clone()))
                .collect(),
        }
    }
}

pub fn write_codebook(path: &Path, codebook: &Codebook) -> Result<(), ExportError> {
    let json = serde_json::to_vec_pretty(codebook)?;
    write_atomic(path, &json)
}
