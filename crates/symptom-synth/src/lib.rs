//! symptom-synth
//!
//! The generative-scoring core: a sampler that draws noisy questionnaire
//! answers biased toward a hidden condition, a scorer that re-infers a
//! ranking from those answers alone, and the assembler that turns the
//! ranking into a finished row.

pub mod assemble;
pub mod config;
pub mod demographics;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod scoring;
pub mod validate;
pub mod weighted;

pub use config::GenerationConfig;
pub use error::SynthError;
pub use generator::{Dataset, Generator};
pub use validate::{Validated, validate};
