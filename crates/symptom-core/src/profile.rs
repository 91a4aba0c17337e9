//! Condition profiles: how strongly each condition favors each answer.
//!
//! Conditions are authored as [`ConditionSpec`] values keyed by option
//! letter, then compiled by [`crate::Domain::new`] into [`Condition`]s whose
//! profiles are indexed by question and option position.

use serde::{Deserialize, Serialize};

use crate::questions::{OPTION_COUNT, QUESTION_COUNT};

/// Smallest and largest weight an author may give a declared option.
pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 3;

/// A condition as written by hand, before the integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSpec {
    pub code: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub emergency: bool,
    pub chronic_onset: bool,
    pub profile: Vec<(usize, Vec<(char, u8)>)>,
}

impl ConditionSpec {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            specialties: Vec::new(),
            emergency: false,
            chronic_onset: false,
            profile: Vec::new(),
        }
    }

    /// Eligible specialties, most specific first.
    pub fn specialties(mut self, codes: &[&str]) -> Self {
        self.specialties = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn emergency(mut self) -> Self {
        self.emergency = true;
        self
    }

    /// Marks the onset entry as favoring the chronic option.
    pub fn chronic_onset(mut self) -> Self {
        self.chronic_onset = true;
        self
    }

    /// Declare preferred options for question `index`.
    pub fn weights(mut self, index: usize, options: &[(char, u8)]) -> Self {
        self.profile.push((index, options.to_vec()));
        self
    }
}

/// Declared weights for one question. A zero slot means the option is not
/// among the condition's preferred answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionWeights {
    weights: [u8; OPTION_COUNT],
}

impl QuestionWeights {
    pub(crate) fn set(&mut self, option: usize, weight: u8) {
        self.weights[option] = weight;
    }

    pub(crate) fn is_set(&self, option: usize) -> bool {
        self.weights[option] > 0
    }

    /// Weight of the option at `option`, if declared.
    pub fn weight(&self, option: usize) -> Option<u8> {
        match self.weights.get(option) {
            Some(&w) if w > 0 => Some(w),
            _ => None,
        }
    }

    /// Iterate `(option position, weight)` over declared options.
    pub fn declared(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0)
            .map(|(i, w)| (i, *w))
    }

    /// Position of the highest-weighted declared option. Ties go to the
    /// earlier option.
    pub fn strongest(&self) -> Option<usize> {
        self.declared()
            .fold(None, |best: Option<(usize, u8)>, (i, w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((i, w)),
            })
            .map(|(i, _)| i)
    }
}

/// Per-question weight table. Undeclared questions are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    entries: [Option<QuestionWeights>; QUESTION_COUNT],
}

impl Profile {
    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut Option<QuestionWeights> {
        &mut self.entries[index]
    }

    pub fn entry(&self, index: usize) -> Option<&QuestionWeights> {
        self.entries.get(index).and_then(|e| e.as_ref())
    }

    pub fn declares(&self, index: usize) -> bool {
        self.entry(index).is_some()
    }

    /// Iterate `(question index, weights)` over declared questions.
    pub fn declared(&self) -> impl Iterator<Item = (usize, &QuestionWeights)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|w| (i, w)))
    }
}

/// A compiled, immutable condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub code: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub emergency: bool,
    pub chronic_onset: bool,
    pub profile: Profile,
}
