//! Re-inference of a condition ranking from an observed answer vector.
//!
//! The scorer sees only the answers. It has no knowledge of which
//! condition biased the sampler.

use std::cmp::Ordering;

use symptom_core::Domain;
use symptom_core::models::row::AnswerVector;
use symptom_core::profile::Condition;

/// Deducted when a condition declares a question but the observed answer is
/// not among its preferred options.
pub const MISMATCH_PENALTY: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionScore<'a> {
    pub condition: &'a Condition,
    pub score: u32,
}

impl ConditionScore<'_> {
    pub fn code(&self) -> &str {
        &self.condition.code
    }
}

/// Signed contribution of question `index` to `condition`'s score.
pub fn contribution(domain: &Domain, condition: &Condition, index: usize, answer: char) -> i32 {
    let Some(declared) = condition.profile.entry(index) else {
        return 0;
    };
    domain
        .question(index)
        .and_then(|q| q.position(answer))
        .and_then(|position| declared.weight(position))
        .map_or(-MISMATCH_PENALTY, i32::from)
}

/// Total score of one condition, floored at zero.
pub fn score_condition(domain: &Domain, condition: &Condition, answers: &AnswerVector) -> u32 {
    let raw: i32 = answers
        .iter()
        .enumerate()
        .map(|(index, answer)| contribution(domain, condition, index, answer))
        .sum();
    raw.max(0) as u32
}

/// Score every condition and rank by score descending.
///
/// Equal scores are ordered by condition code ascending, so the ranking
/// does not depend on table declaration order.
pub fn score_all<'a>(domain: &'a Domain, answers: &AnswerVector) -> Vec<ConditionScore<'a>> {
    let mut ranked: Vec<ConditionScore<'a>> = domain
        .conditions()
        .iter()
        .map(|condition| ConditionScore {
            condition,
            score: score_condition(domain, condition, answers),
        })
        .collect();
    ranked.sort_by(rank_order);
    ranked
}

fn rank_order(a: &ConditionScore<'_>, b: &ConditionScore<'_>) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.code().cmp(b.code()))
}
