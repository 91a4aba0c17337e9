use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use symptom_core::Domain;
use symptom_core::models::row::{GeneratedRow, HEADER, SourceType};

use crate::assemble::{compose_note, select_specialties, triage};
use crate::config::GenerationConfig;
use crate::demographics::DemographicModel;
use crate::error::SynthError;
use crate::sampler::AnswerSampler;
use crate::scoring::score_all;
use crate::weighted::WeightedTable;

/// A generated batch with its column header.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub header: &'static [&'static str],
    pub rows: Vec<GeneratedRow>,
}

/// Seeded batch generator.
///
/// Owns the single pseudo-random stream. Every row consumes it in a fixed
/// order: condition choice, age, sex, location, onset, comorbidity ×2,
/// 10 × (weighted draw, noise draw), source tag. Reordering these draws
/// changes every batch produced for a given seed.
pub struct Generator<'d> {
    domain: &'d Domain,
    config: GenerationConfig,
    created_at: jiff::civil::Date,
    rng: ChaCha8Rng,
    demographics: DemographicModel,
    answers: AnswerSampler,
    sources: WeightedTable<SourceType>,
    row_counter: usize,
}

impl<'d> Generator<'d> {
    pub fn new(domain: &'d Domain, config: GenerationConfig) -> Result<Self, SynthError> {
        config.validate()?;
        let created_at = config.resolved_date();
        Ok(Self {
            domain,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            created_at,
            demographics: DemographicModel::new()?,
            answers: AnswerSampler::new(domain)?,
            sources: WeightedTable::new([
                (SourceType::Synthetic, 80),
                (SourceType::AugmentedPublic, 20),
            ])?,
            row_counter: 0,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Rows produced so far.
    pub fn row_counter(&self) -> usize {
        self.row_counter
    }

    pub fn generate_row(&mut self) -> Result<GeneratedRow, SynthError> {
        self.row_counter += 1;
        let id = format!("row_{:05}", self.row_counter);

        let domain = self.domain;
        let conditions = domain.conditions();
        let target = &conditions[self.rng.gen_range(0..conditions.len())];

        let demographics = self.demographics.sample(target, &mut self.rng);
        let answers = self.answers.sample_answers(
            &target.code,
            &mut self.rng,
            self.config.noise_probability,
        )?;

        let ranked = score_all(domain, &answers);
        let triage = triage(&ranked)?;
        let specialties = select_specialties(domain, triage.condition, triage.confidence)?;

        let source = *self.sources.sample(&mut self.rng);
        let notes = compose_note(&triage.condition.code, triage.note_type, source);

        tracing::trace!(
            id = %id,
            target = %target.code,
            emitted = %triage.condition.code,
            confidence = triage.confidence,
            "row generated"
        );

        Ok(GeneratedRow {
            id,
            answers,
            age: demographics.age,
            sex: demographics.sex,
            onset_days: demographics.onset_days,
            comorbidity_flags: demographics.comorbidity_flags,
            location_type: demographics.location,
            top_condition_code: triage.condition.code.clone(),
            top_condition_name: triage.condition.name.clone(),
            specialties: specialties.codes,
            specialty_names: specialties.names,
            confidence: triage.confidence,
            notes,
            source_type: source,
            created_at: self.created_at,
        })
    }

    pub fn generate_dataset(&mut self, row_count: usize) -> Result<Dataset, SynthError> {
        tracing::info!(
            rows = row_count,
            seed = self.config.seed,
            "generating dataset"
        );

        let rows = (0..row_count)
            .map(|_| self.generate_row())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset {
            header: &HEADER,
            rows,
        })
    }
}
