use thiserror::Error;

/// Configuration-integrity failures detected while building a [`crate::Domain`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("expected {expected} questions, got {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("question '{question_id}' is malformed: {reason}")]
    MalformedQuestion { question_id: String, reason: String },

    #[error("condition table is empty")]
    EmptyConditions,

    #[error("duplicate condition code: {0}")]
    DuplicateCondition(String),

    #[error("duplicate specialty code: {0}")]
    DuplicateSpecialty(String),

    #[error("condition '{condition}' lists no specialties")]
    NoSpecialties { condition: String },

    #[error("condition '{condition}' references unknown specialty '{specialty}'")]
    UnknownSpecialty { condition: String, specialty: String },

    #[error("condition '{condition}' references question index {index}, outside 0..{max}")]
    QuestionOutOfRange {
        condition: String,
        index: usize,
        max: usize,
    },

    #[error("condition '{condition}' declares question index {index} twice")]
    DuplicateQuestion { condition: String, index: usize },

    #[error("condition '{condition}' uses option '{option}' not offered by question {index}")]
    UnknownOption {
        condition: String,
        index: usize,
        option: char,
    },

    #[error("condition '{condition}' declares option '{option}' twice for question {index}")]
    DuplicateOption {
        condition: String,
        index: usize,
        option: char,
    },

    #[error("condition '{condition}' gives option '{option}' of question {index} weight {weight}, expected 1-3")]
    InvalidWeight {
        condition: String,
        index: usize,
        option: char,
        weight: u8,
    },

    #[error("condition '{condition}' is marked chronic but its onset entry does not favor the chronic option")]
    ChronicWithoutOnset { condition: String },
}
