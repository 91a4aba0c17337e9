use serde::{Deserialize, Serialize};

/// Code of the general practitioner, appended by the specialty policy when
/// the emitted label is uncertain.
pub const GENERAL_PRACTITIONER: &str = "GP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub code: String,
    pub title: String,
}

impl Specialty {
    pub fn new(code: &str, title: &str) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
        }
    }
}

pub fn standard_specialties() -> Vec<Specialty> {
    [
        (GENERAL_PRACTITIONER, "General Practitioner"),
        ("ENT", "Otolaryngologist"),
        ("CARDIO", "Cardiologist"),
        ("PULM", "Pulmonologist"),
        ("GASTRO", "Gastroenterologist"),
        ("NEURO", "Neurologist"),
        ("DERM", "Dermatologist"),
        ("ORTHO", "Orthopedist"),
        ("ER", "Emergency Medicine"),
        ("ENDO", "Endocrinologist"),
        ("PSYCH", "Psychiatrist"),
    ]
    .iter()
    .map(|(code, title)| Specialty::new(code, title))
    .collect()
}
