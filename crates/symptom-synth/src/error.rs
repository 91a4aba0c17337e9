use symptom_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("unknown key: {0}")]
    InvalidKey(String),

    #[error("weighted distribution is empty or has zero total weight")]
    EmptyDistribution,

    #[error("score table is empty")]
    EmptyRanking,

    #[error("invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
