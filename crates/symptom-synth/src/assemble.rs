//! Row assembly policies: confidence normalization, emergency override,
//! specialty selection, and note text.

use symptom_core::Domain;
use symptom_core::models::row::{NoteType, SourceType};
use symptom_core::profile::Condition;
use symptom_core::specialties::GENERAL_PRACTITIONER;

use crate::error::SynthError;
use crate::scoring::ConditionScore;

pub const CONFIDENCE_MIN: f64 = 0.20;
pub const CONFIDENCE_MAX: f64 = 0.99;

/// Confidence floor for emergency-flagged labels.
pub const EMERGENCY_CONFIDENCE: f64 = 0.85;

/// Below this confidence the general practitioner is added as a fallback.
pub const GP_CONFIDENCE_THRESHOLD: f64 = 0.8;

pub const MAX_SPECIALTIES: usize = 3;

/// Number of top-ranked scores in the confidence denominator.
pub const CONFIDENCE_WINDOW: usize = 5;

const AUGMENTED_NOTE: &str = " Based on clinical vignette guidelines (paraphrased).";

/// Emitted label with its confidence and note type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triage<'a> {
    pub condition: &'a Condition,
    pub confidence: f64,
    pub note_type: NoteType,
}

/// Specialty codes and display names, parallel and equally truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtySelection {
    pub codes: Vec<String>,
    pub names: Vec<String>,
}

/// `top / sum(top 5)`, rounded to two decimals and clamped to
/// [`CONFIDENCE_MIN`, `CONFIDENCE_MAX`]. A zero denominator counts as 1.
pub fn confidence(ranked: &[ConditionScore<'_>]) -> f64 {
    let top = ranked.first().map_or(0, |s| s.score);
    let window: u32 = ranked
        .iter()
        .take(CONFIDENCE_WINDOW)
        .map(|s| s.score)
        .sum();
    let denominator = if window == 0 { 1 } else { window };

    let ratio = f64::from(top) / f64::from(denominator);
    round2(ratio).clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
}

/// Take the top-ranked condition and apply the emergency override.
pub fn triage<'a>(ranked: &[ConditionScore<'a>]) -> Result<Triage<'a>, SynthError> {
    let top = ranked.first().ok_or(SynthError::EmptyRanking)?;
    let base = confidence(ranked);

    let (confidence, note_type) = if top.condition.emergency {
        (base.max(EMERGENCY_CONFIDENCE), NoteType::EmergencyReferral)
    } else {
        (base, NoteType::Standard)
    };

    Ok(Triage {
        condition: top.condition,
        confidence,
        note_type,
    })
}

/// Declared specialties, plus the general practitioner when absent and the
/// label is uncertain, truncated to [`MAX_SPECIALTIES`].
pub fn select_specialties(
    domain: &Domain,
    condition: &Condition,
    confidence: f64,
) -> Result<SpecialtySelection, SynthError> {
    let mut codes = condition.specialties.clone();
    if !codes.iter().any(|c| c == GENERAL_PRACTITIONER) && confidence < GP_CONFIDENCE_THRESHOLD {
        codes.push(GENERAL_PRACTITIONER.to_string());
    }
    codes.truncate(MAX_SPECIALTIES);

    let names = codes
        .iter()
        .map(|code| {
            domain
                .specialty(code)
                .map(|s| s.title.clone())
                .ok_or_else(|| SynthError::InvalidKey(code.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SpecialtySelection { codes, names })
}

pub fn compose_note(code: &str, note_type: NoteType, source: SourceType) -> String {
    let mut note = format!("Patient profile matches {code}. {note_type} indicated.");
    if source == SourceType::AugmentedPublic {
        note.push_str(AUGMENTED_NOTE);
    }
    note
}

/// Halves round to even, so 0.625 becomes 0.62.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
