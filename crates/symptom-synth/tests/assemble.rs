use symptom_core::Domain;
use symptom_core::models::row::{NoteType, SourceType};
use symptom_synth::SynthError;
use symptom_synth::assemble::{
    CONFIDENCE_MAX, CONFIDENCE_MIN, EMERGENCY_CONFIDENCE, compose_note, confidence,
    select_specialties, triage,
};
use symptom_synth::scoring::ConditionScore;

/// Rank the domain's conditions with the given scores, highest first.
fn ranked_with<'a>(domain: &'a Domain, top: &str, scores: &[u32]) -> Vec<ConditionScore<'a>> {
    let mut ranked = vec![ConditionScore {
        condition: domain.condition(top).unwrap(),
        score: scores[0],
    }];
    ranked.extend(
        domain
            .conditions()
            .iter()
            .filter(|c| c.code != top)
            .zip(scores[1..].iter().copied().chain(std::iter::repeat(0)))
            .map(|(condition, score)| ConditionScore { condition, score }),
    );
    ranked
}

#[test]
fn confidence_is_top_over_top_five() {
    let domain = Domain::standard().unwrap();
    let ranked = ranked_with(&domain, "MIGRAINE", &[10, 5, 3, 1, 1, 9]);
    assert_eq!(confidence(&ranked), 0.5);
}

#[test]
fn confidence_rounds_halves_to_even() {
    let domain = Domain::standard().unwrap();

    let ranked = ranked_with(&domain, "MIGRAINE", &[5, 2, 1]);
    assert_eq!(confidence(&ranked), 0.62);

    let ranked = ranked_with(&domain, "MIGRAINE", &[3, 5]);
    assert_eq!(confidence(&ranked), 0.38);
}

#[test]
fn zero_scores_use_unit_denominator_and_floor() {
    let domain = Domain::standard().unwrap();
    let ranked = ranked_with(&domain, "MIGRAINE", &[0]);
    assert_eq!(confidence(&ranked), CONFIDENCE_MIN);
}

#[test]
fn lone_score_is_capped() {
    let domain = Domain::standard().unwrap();
    let ranked = ranked_with(&domain, "MIGRAINE", &[12]);
    assert_eq!(confidence(&ranked), CONFIDENCE_MAX);
}

#[test]
fn confidence_stays_in_bounds_for_any_table() {
    let domain = Domain::standard().unwrap();
    for top in 0..20u32 {
        for rest in 0..=top {
            for tail in 0..=rest {
                let ranked = ranked_with(&domain, "GERD", &[top, rest, rest, tail, tail, tail]);
                let c = confidence(&ranked);
                assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&c), "{c}");
            }
        }
    }
}

#[test]
fn emergency_label_is_floored_and_flagged() {
    let domain = Domain::standard().unwrap();
    let ranked = ranked_with(&domain, "AC_MI", &[6, 6, 6, 6, 6]);
    assert_eq!(confidence(&ranked), 0.2);

    let result = triage(&ranked).unwrap();
    assert_eq!(result.condition.code, "AC_MI");
    assert_eq!(result.confidence, EMERGENCY_CONFIDENCE);
    assert_eq!(result.note_type, NoteType::EmergencyReferral);
}

#[test]
fn emergency_floor_never_lowers_confidence() {
    let domain = Domain::standard().unwrap();
    let ranked = ranked_with(&domain, "AC_APPEN", &[14]);
    let result = triage(&ranked).unwrap();
    assert_eq!(result.confidence, CONFIDENCE_MAX);
}

#[test]
fn standard_label_keeps_its_confidence() {
    let domain = Domain::standard().unwrap();
    let ranked = ranked_with(&domain, "LUMBAGO", &[4, 4]);
    let result = triage(&ranked).unwrap();
    assert_eq!(result.confidence, 0.5);
    assert_eq!(result.note_type, NoteType::Standard);
}

#[test]
fn empty_ranking_is_an_error() {
    assert!(matches!(triage(&[]), Err(SynthError::EmptyRanking)));
}

#[test]
fn general_practitioner_added_only_when_uncertain() {
    let domain = Domain::standard().unwrap();
    let appendicitis = domain.condition("AC_APPEN").unwrap();

    let uncertain = select_specialties(&domain, appendicitis, 0.79).unwrap();
    assert_eq!(uncertain.codes, vec!["ER", "GASTRO", "GP"]);
    assert_eq!(
        uncertain.names,
        vec![
            "Emergency Medicine",
            "Gastroenterologist",
            "General Practitioner"
        ]
    );

    let confident = select_specialties(&domain, appendicitis, 0.8).unwrap();
    assert_eq!(confident.codes, vec!["ER", "GASTRO"]);
}

#[test]
fn general_practitioner_not_duplicated() {
    let domain = Domain::standard().unwrap();
    let migraine = domain.condition("MIGRAINE").unwrap();
    let selection = select_specialties(&domain, migraine, 0.3).unwrap();
    assert_eq!(selection.codes, vec!["NEURO", "GP"]);
    assert_eq!(selection.codes.len(), selection.names.len());
}

#[test]
fn every_condition_selects_at_most_three() {
    let domain = Domain::standard().unwrap();
    for condition in domain.conditions() {
        for confidence in [0.2, 0.5, 0.79, 0.8, 0.99] {
            let selection = select_specialties(&domain, condition, confidence).unwrap();
            assert!(selection.codes.len() <= 3);
            assert_eq!(selection.codes.len(), selection.names.len());
            let had_gp = condition.specialties.iter().any(|s| s == "GP");
            let has_gp = selection.codes.iter().any(|s| s == "GP");
            assert_eq!(has_gp, had_gp || confidence < 0.8, "{}", condition.code);
        }
    }
}

#[test]
fn note_mentions_label_and_source() {
    assert_eq!(
        compose_note("GERD", NoteType::Standard, SourceType::Synthetic),
        "Patient profile matches GERD. Standard indicated."
    );
    assert_eq!(
        compose_note("AC_MI", NoteType::EmergencyReferral, SourceType::AugmentedPublic),
        "Patient profile matches AC_MI. EMERGENCY_REFERRAL indicated. \
         Based on clinical vignette guidelines (paraphrased)."
    );
}
