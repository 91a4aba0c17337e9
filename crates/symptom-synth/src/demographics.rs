//! Demographic draws conditioned on the hidden target.
//!
//! All skews are fixed lookup rules keyed by condition code.

use std::ops::RangeInclusive;

use rand::Rng;
use symptom_core::models::row::{LocationType, NO_COMORBIDITIES, Sex};
use symptom_core::profile::Condition;

use crate::error::SynthError;
use crate::weighted::WeightedTable;

pub const DEFAULT_AGES: RangeInclusive<u32> = 18..=85;
pub const ACUTE_ONSET_DAYS: RangeInclusive<u32> = 0..=14;
pub const CHRONIC_ONSET_DAYS: RangeInclusive<u32> = 30..=365;

/// Separator for the comorbidity column.
pub const COMORBIDITY_SEPARATOR: &str = "|";

/// Conditions whose patients skew younger.
const YOUNG_CONDITIONS: &[&str] = &["AC_PHARY", "AC_APPEN"];
const YOUNG_AGES: RangeInclusive<u32> = 5..=40;

/// Arthritis-type and exertional-cardiac conditions skew older.
const OLDER_CONDITIONS: &[&str] = &["OSTEO_ARTH", "STABLE_ANG"];
const OLDER_AGES: RangeInclusive<u32> = 50..=90;

/// Conditions with a strong female skew.
const FEMALE_SKEWED: &[&str] = &["UTI_SIMPLE"];

/// A comorbidity that may appear above an age threshold.
#[derive(Debug, Clone, Copy)]
struct AgeComorbidity {
    flag: &'static str,
    /// Strictly older than this.
    min_age: u32,
    probability: f64,
}

const AGE_COMORBIDITIES: [AgeComorbidity; 2] = [
    AgeComorbidity {
        flag: "hypertension",
        min_age: 50,
        probability: 0.4,
    },
    AgeComorbidity {
        flag: "diabetes",
        min_age: 50,
        probability: 0.3,
    },
];

/// Comorbidities implied by the condition itself.
const CONDITION_COMORBIDITIES: &[(&str, &str)] = &[("HYPERTEN", "hypertension")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub age: u32,
    pub sex: Sex,
    pub location: LocationType,
    pub onset_days: u32,
    pub comorbidity_flags: String,
}

/// Pre-built weighted tables for the categorical demographic draws.
#[derive(Debug, Clone)]
pub struct DemographicModel {
    sexes: WeightedTable<Sex>,
    female_skewed_sexes: WeightedTable<Sex>,
    locations: WeightedTable<LocationType>,
}

impl DemographicModel {
    pub fn new() -> Result<Self, SynthError> {
        Ok(Self {
            sexes: WeightedTable::new([(Sex::Male, 49), (Sex::Female, 49), (Sex::Other, 2)])?,
            female_skewed_sexes: WeightedTable::new([(Sex::Female, 90), (Sex::Male, 10)])?,
            locations: WeightedTable::new([
                (LocationType::Urban, 60),
                (LocationType::Suburban, 25),
                (LocationType::Rural, 15),
            ])?,
        })
    }

    /// Draw demographics for `target`, consuming the stream in the order
    /// age, sex, location, onset, comorbidity ×2.
    pub fn sample<R: Rng + ?Sized>(&self, target: &Condition, rng: &mut R) -> Demographics {
        let age = rng.gen_range(age_range(&target.code));

        let sexes = if FEMALE_SKEWED.contains(&target.code.as_str()) {
            &self.female_skewed_sexes
        } else {
            &self.sexes
        };
        let sex = *sexes.sample(rng);

        let location = *self.locations.sample(rng);

        let onset_days = rng.gen_range(onset_range(target));

        let mut flags: Vec<&str> = Vec::new();
        for rule in &AGE_COMORBIDITIES {
            let hit = rng.r#gen::<f64>() < rule.probability;
            if age > rule.min_age && hit {
                flags.push(rule.flag);
            }
        }
        for &(code, flag) in CONDITION_COMORBIDITIES {
            if code == target.code && !flags.contains(&flag) {
                flags.push(flag);
            }
        }

        Demographics {
            age,
            sex,
            location,
            onset_days,
            comorbidity_flags: join_comorbidities(&flags),
        }
    }
}

pub fn age_range(code: &str) -> RangeInclusive<u32> {
    if YOUNG_CONDITIONS.contains(&code) {
        YOUNG_AGES
    } else if OLDER_CONDITIONS.contains(&code) {
        OLDER_AGES
    } else {
        DEFAULT_AGES
    }
}

pub fn onset_range(condition: &Condition) -> RangeInclusive<u32> {
    if condition.chronic_onset {
        CHRONIC_ONSET_DAYS
    } else {
        ACUTE_ONSET_DAYS
    }
}

fn join_comorbidities(flags: &[&str]) -> String {
    if flags.is_empty() {
        NO_COMORBIDITIES.to_string()
    } else {
        flags.join(COMORBIDITY_SEPARATOR)
    }
}
