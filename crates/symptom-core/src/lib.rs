//! symptom-core
//!
//! Pure domain tables and record types for the symptom intake synthesizer.
//! No randomness and no I/O. This is the shared vocabulary that the
//! sampler, the scorer, and the export sinks all read from.

pub mod conditions;
pub mod domain;
pub mod error;
pub mod models;
pub mod profile;
pub mod questions;
pub mod specialties;

pub use domain::Domain;
pub use error::DomainError;
