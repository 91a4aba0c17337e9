use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate checks and histograms over one finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_generated: usize,
    pub valid_rows: usize,
    pub failures: usize,
    pub checks: ValidationChecks,
    pub stats: BatchStats,
}

/// One flag per failure category. A flag flips to `false` as soon as one
/// row fails that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationChecks {
    pub row_count_passed: bool,
    pub no_nulls: bool,
    pub valid_enums: bool,
    pub valid_ranges: bool,
}

impl Default for ValidationChecks {
    fn default() -> Self {
        Self {
            row_count_passed: false,
            no_nulls: true,
            valid_enums: true,
            valid_ranges: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Valid rows per emitted condition code.
    pub conditions: BTreeMap<String, usize>,
    pub age_groups: AgeGroups,
}

impl BatchStats {
    pub fn record(&mut self, condition_code: &str, age: u32) {
        *self
            .conditions
            .entry(condition_code.to_string())
            .or_default() += 1;
        self.age_groups.record(age);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroups {
    #[serde(rename = "0-17")]
    pub minors: usize,
    #[serde(rename = "18-64")]
    pub adults: usize,
    #[serde(rename = "65+")]
    pub seniors: usize,
}

impl AgeGroups {
    pub fn record(&mut self, age: u32) {
        match age {
            0..=17 => self.minors += 1,
            18..=64 => self.adults += 1,
            _ => self.seniors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.minors + self.adults + self.seniors
    }
}
