//! Post-hoc batch validation.
//!
//! Row-level failures are not fatal: the row is counted, excluded, and the
//! matching check flag in the report flips to `false`.

use std::ops::RangeInclusive;

use symptom_core::Domain;
use symptom_core::models::report::ValidationReport;
use symptom_core::models::row::GeneratedRow;

pub const VALID_AGES: RangeInclusive<u32> = 0..=120;

/// First check a row failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFailure {
    EmptyField,
    InvalidAnswer { question: usize, answer: char },
    AgeOutOfRange(u32),
}

/// A report plus the rows that passed every check, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub report: ValidationReport,
    pub valid_rows: Vec<GeneratedRow>,
}

/// Checks run in order: empty fields, answer letters, age range.
pub fn check_row(domain: &Domain, row: &GeneratedRow) -> Result<(), RowFailure> {
    if row.has_empty_field() {
        return Err(RowFailure::EmptyField);
    }

    for (question, answer) in row.answers.iter().enumerate() {
        let offered = domain.question(question).is_some_and(|q| q.offers(answer));
        if !offered {
            return Err(RowFailure::InvalidAnswer { question, answer });
        }
    }

    if !VALID_AGES.contains(&row.age) {
        return Err(RowFailure::AgeOutOfRange(row.age));
    }

    Ok(())
}

pub fn validate(domain: &Domain, rows: Vec<GeneratedRow>, min_valid_rows: usize) -> Validated {
    let mut report = ValidationReport {
        total_generated: rows.len(),
        ..ValidationReport::default()
    };
    let mut valid_rows = Vec::with_capacity(rows.len());

    for row in rows {
        match check_row(domain, &row) {
            Ok(()) => {
                report.stats.record(&row.top_condition_code, row.age);
                valid_rows.push(row);
            }
            Err(failure) => {
                tracing::warn!(id = %row.id, ?failure, "row excluded");
                report.failures += 1;
                match failure {
                    RowFailure::EmptyField => report.checks.no_nulls = false,
                    RowFailure::InvalidAnswer { .. } => report.checks.valid_enums = false,
                    RowFailure::AgeOutOfRange(_) => report.checks.valid_ranges = false,
                }
            }
        }
    }

    report.valid_rows = valid_rows.len();
    report.checks.row_count_passed = !valid_rows.is_empty() && valid_rows.len() >= min_valid_rows;

    tracing::info!(
        total = report.total_generated,
        valid = report.valid_rows,
        failures = report.failures,
        "dataset validated"
    );

    Validated { report, valid_rows }
}
