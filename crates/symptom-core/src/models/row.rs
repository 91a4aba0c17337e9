use std::fmt;

use serde::{Deserialize, Serialize};

use crate::questions::QUESTION_COUNT;

/// Column order of the emitted table. Collaborators rely on this order.
pub const HEADER: [&str; 24] = [
    "id",
    "q1",
    "q2",
    "q3",
    "q4",
    "q5",
    "q6",
    "q7",
    "q8",
    "q9",
    "q10",
    "age",
    "sex",
    "onset_days",
    "comorbidity_flags",
    "location_type",
    "top_condition_code",
    "top_condition_name",
    "specialties",
    "specialty_names",
    "confidence",
    "notes",
    "source_type",
    "created_at",
];

/// Separator for multi-valued specialty columns.
pub const LIST_SEPARATOR: &str = ";";

/// Sentinel written when a patient has no comorbidities.
pub const NO_COMORBIDITIES: &str = "none";

/// One option letter per question, in question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVector([char; QUESTION_COUNT]);

impl AnswerVector {
    pub fn new(letters: [char; QUESTION_COUNT]) -> Self {
        Self(letters)
    }

    pub fn letters(&self) -> &[char; QUESTION_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Other => "O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Urban,
    Suburban,
    Rural,
}

impl LocationType {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Urban => "urban",
            LocationType::Suburban => "suburban",
            LocationType::Rural => "rural",
        }
    }
}

/// Provenance tag of a generated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Synthetic,
    AugmentedPublic,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Synthetic => "synthetic",
            SourceType::AugmentedPublic => "augmented_public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    Standard,
    #[serde(rename = "EMERGENCY_REFERRAL")]
    EmergencyReferral,
}

impl NoteType {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteType::Standard => "Standard",
            NoteType::EmergencyReferral => "EMERGENCY_REFERRAL",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Sex, LocationType, SourceType, NoteType);

/// A finished synthetic patient record. Built whole, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRow {
    pub id: String,
    pub answers: AnswerVector,
    pub age: u32,
    pub sex: Sex,
    pub onset_days: u32,
    pub comorbidity_flags: String,
    pub location_type: LocationType,
    pub top_condition_code: String,
    pub top_condition_name: String,
    pub specialties: Vec<String>,
    pub specialty_names: Vec<String>,
    pub confidence: f64,
    pub notes: String,
    pub source_type: SourceType,
    pub created_at: jiff::civil::Date,
}

impl GeneratedRow {
    /// True when any textual column would be written empty.
    pub fn has_empty_field(&self) -> bool {
        let text = [
            &self.id,
            &self.comorbidity_flags,
            &self.top_condition_code,
            &self.top_condition_name,
            &self.notes,
        ];
        text.iter().any(|s| s.is_empty())
            || self.specialties.is_empty()
            || self.specialty_names.is_empty()
            || self.specialties.iter().any(String::is_empty)
            || self.specialty_names.iter().any(String::is_empty)
    }

    /// Field values in [`HEADER`] order.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(HEADER.len());
        record.push(self.id.clone());
        record.extend(self.answers.iter().map(String::from));
        record.push(self.age.to_string());
        record.push(self.sex.to_string());
        record.push(self.onset_days.to_string());
        record.push(self.comorbidity_flags.clone());
        record.push(self.location_type.to_string());
        record.push(self.top_condition_code.clone());
        record.push(self.top_condition_name.clone());
        record.push(self.specialties.join(LIST_SEPARATOR));
        record.push(self.specialty_names.join(LIST_SEPARATOR));
        record.push(self.confidence.to_string());
        record.push(self.notes.clone());
        record.push(self.source_type.to_string());
        record.push(self.created_at.to_string());
        record
    }
}
