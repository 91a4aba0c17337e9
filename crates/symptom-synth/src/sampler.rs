//! Conditioned answer sampler.
//!
//! Draws one answer per question from a distribution biased toward the
//! hidden target's profile, then applies independent "patient confusion"
//! noise.

use std::collections::HashMap;

use rand::Rng;
use symptom_core::Domain;
use symptom_core::models::row::AnswerVector;
use symptom_core::profile::Condition;
use symptom_core::questions::{OPTION_COUNT, QUESTION_COUNT};

use crate::error::SynthError;
use crate::weighted::WeightedTable;

/// Weight every option starts with.
pub const BASE_WEIGHT: u32 = 1;

/// Multiplier applied to a declared option's authored strength.
pub const PROFILE_BOOST: u32 = 4;

/// Chance that a drawn answer is discarded for a uniform pick.
pub const NOISE_PROBABILITY: f64 = 0.10;

/// Sampling weights for question `index` under `condition`'s profile.
pub fn option_weights(condition: &Condition, index: usize) -> [u32; OPTION_COUNT] {
    let mut weights = [BASE_WEIGHT; OPTION_COUNT];
    if let Some(declared) = condition.profile.entry(index) {
        for (option, strength) in declared.declared() {
            weights[option] += PROFILE_BOOST * u32::from(strength);
        }
    }
    weights
}

/// Per-condition answer tables, built once from a checked [`Domain`].
#[derive(Debug, Clone)]
pub struct AnswerSampler {
    options: Vec<[char; OPTION_COUNT]>,
    tables: HashMap<String, Vec<WeightedTable<char>>>,
}

impl AnswerSampler {
    pub fn new(domain: &Domain) -> Result<Self, SynthError> {
        let options: Vec<_> = domain.questions().iter().map(|q| q.options).collect();

        let mut tables = HashMap::with_capacity(domain.conditions().len());
        for condition in domain.conditions() {
            let per_question = options
                .iter()
                .enumerate()
                .map(|(index, letters)| {
                    WeightedTable::new(letters.iter().copied().zip(option_weights(condition, index)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            tables.insert(condition.code.clone(), per_question);
        }

        Ok(Self { options, tables })
    }

    /// Sample a noisy answer vector for the condition with code `target`.
    ///
    /// Per question the stream is consumed as: weighted draw, noise draw, and
    /// a uniform pick only when the noise draw hits.
    pub fn sample_answers<R: Rng + ?Sized>(
        &self,
        target: &str,
        rng: &mut R,
        noise_probability: f64,
    ) -> Result<AnswerVector, SynthError> {
        let tables = self
            .tables
            .get(target)
            .ok_or_else(|| SynthError::InvalidKey(target.to_string()))?;

        let mut letters = [' '; QUESTION_COUNT];
        for (index, (table, options)) in tables.iter().zip(&self.options).enumerate() {
            let mut answer = *table.sample(rng);

            if rng.r#gen::<f64>() < noise_probability {
                answer = options[rng.gen_range(0..OPTION_COUNT)];
            }
            letters[index] = answer;
        }

        Ok(AnswerVector::new(letters))
    }
}
