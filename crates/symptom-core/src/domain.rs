use std::collections::HashSet;

use crate::conditions::standard_conditions;
use crate::error::DomainError;
use crate::profile::{Condition, ConditionSpec, MAX_WEIGHT, MIN_WEIGHT, Profile, QuestionWeights};
use crate::questions::{CHRONIC_OPTION, ONSET_QUESTION, OPTION_COUNT, QUESTION_COUNT, Question, standard_questions};
use crate::specialties::{Specialty, standard_specialties};

/// The validated, read-only domain tables.
///
/// Built once at startup through [`Domain::new`], which runs the full
/// integrity check. Nothing mutates a `Domain` afterwards.
#[derive(Debug, Clone)]
pub struct Domain {
    questions: Vec<Question>,
    specialties: Vec<Specialty>,
    conditions: Vec<Condition>,
}

impl Domain {
    /// The built-in questionnaire, specialty directory, and condition table.
    pub fn standard() -> Result<Self, DomainError> {
        Self::new(
            standard_questions(),
            standard_specialties(),
            standard_conditions(),
        )
    }

    pub fn new(
        questions: Vec<Question>,
        specialties: Vec<Specialty>,
        conditions: Vec<ConditionSpec>,
    ) -> Result<Self, DomainError> {
        check_questions(&questions)?;

        let mut specialty_codes = HashSet::new();
        for specialty in &specialties {
            if !specialty_codes.insert(specialty.code.as_str()) {
                return Err(DomainError::DuplicateSpecialty(specialty.code.clone()));
            }
        }

        if conditions.is_empty() {
            return Err(DomainError::EmptyConditions);
        }

        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(conditions.len());
        for spec in conditions {
            if !seen.insert(spec.code.clone()) {
                return Err(DomainError::DuplicateCondition(spec.code));
            }
            compiled.push(compile_condition(spec, &questions, &specialty_codes)?);
        }

        Ok(Self {
            questions,
            specialties,
            conditions: compiled,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn specialty(&self, code: &str) -> Option<&Specialty> {
        self.specialties.iter().find(|s| s.code == code)
    }

    /// Conditions in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn condition(&self, code: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.code == code)
    }
}

fn check_questions(questions: &[Question]) -> Result<(), DomainError> {
    if questions.len() != QUESTION_COUNT {
        return Err(DomainError::QuestionCount {
            expected: QUESTION_COUNT,
            actual: questions.len(),
        });
    }

    let mut ids = HashSet::new();
    for question in questions {
        if !ids.insert(question.id.as_str()) {
            return Err(DomainError::MalformedQuestion {
                question_id: question.id.clone(),
                reason: "duplicate question id".to_string(),
            });
        }
        let letters: HashSet<char> = question.options.iter().copied().collect();
        if letters.len() != OPTION_COUNT {
            return Err(DomainError::MalformedQuestion {
                question_id: question.id.clone(),
                reason: format!("expected {OPTION_COUNT} distinct option letters"),
            });
        }
    }
    Ok(())
}

fn compile_condition(
    spec: ConditionSpec,
    questions: &[Question],
    specialty_codes: &HashSet<&str>,
) -> Result<Condition, DomainError> {
    if spec.specialties.is_empty() {
        return Err(DomainError::NoSpecialties {
            condition: spec.code,
        });
    }
    if let Some(unknown) = spec
        .specialties
        .iter()
        .find(|s| !specialty_codes.contains(s.as_str()))
    {
        return Err(DomainError::UnknownSpecialty {
            condition: spec.code.clone(),
            specialty: unknown.clone(),
        });
    }

    let mut profile = Profile::default();
    for (index, options) in &spec.profile {
        let index = *index;
        let question = questions
            .get(index)
            .ok_or_else(|| DomainError::QuestionOutOfRange {
                condition: spec.code.clone(),
                index,
                max: QUESTION_COUNT,
            })?;

        let slot = profile.entry_mut(index);
        if slot.is_some() {
            return Err(DomainError::DuplicateQuestion {
                condition: spec.code.clone(),
                index,
            });
        }

        let mut weights = QuestionWeights::default();
        for &(option, weight) in options {
            let position = question
                .position(option)
                .ok_or_else(|| DomainError::UnknownOption {
                    condition: spec.code.clone(),
                    index,
                    option,
                })?;
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                return Err(DomainError::InvalidWeight {
                    condition: spec.code.clone(),
                    index,
                    option,
                    weight,
                });
            }
            if weights.is_set(position) {
                return Err(DomainError::DuplicateOption {
                    condition: spec.code.clone(),
                    index,
                    option,
                });
            }
            weights.set(position, weight);
        }
        *slot = Some(weights);
    }

    if spec.chronic_onset {
        let favors_chronic = questions[ONSET_QUESTION]
            .position(CHRONIC_OPTION)
            .zip(profile.entry(ONSET_QUESTION))
            .is_some_and(|(pos, weights)| weights.weight(pos).is_some());
        if !favors_chronic {
            return Err(DomainError::ChronicWithoutOnset {
                condition: spec.code,
            });
        }
    }

    Ok(Condition {
        code: spec.code,
        name: spec.name,
        specialties: spec.specialties,
        emergency: spec.emergency,
        chronic_onset: spec.chronic_onset,
        profile,
    })
}
