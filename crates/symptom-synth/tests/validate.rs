use symptom_core::Domain;
use symptom_core::models::row::AnswerVector;
use symptom_synth::validate::{RowFailure, check_row};
use symptom_synth::{GenerationConfig, Generator, validate};

fn batch(domain: &Domain, rows: usize) -> Vec<symptom_core::models::row::GeneratedRow> {
    let config = GenerationConfig {
        seed: 314,
        created_at: Some(jiff::civil::date(2026, 1, 2)),
        ..GenerationConfig::default()
    };
    Generator::new(domain, config)
        .unwrap()
        .generate_dataset(rows)
        .unwrap()
        .rows
}

#[test]
fn clean_batch_passes_every_check() {
    let domain = Domain::standard().unwrap();
    let rows = batch(&domain, 200);
    let validated = validate(&domain, rows, 200);

    let report = &validated.report;
    assert_eq!(report.total_generated, 200);
    assert_eq!(report.valid_rows, 200);
    assert_eq!(report.failures, 0);
    assert!(report.checks.row_count_passed);
    assert!(report.checks.no_nulls);
    assert!(report.checks.valid_enums);
    assert!(report.checks.valid_ranges);
    assert_eq!(report.stats.conditions.values().sum::<usize>(), 200);
    assert_eq!(report.stats.age_groups.total(), 200);
}

#[test]
fn out_of_range_age_excludes_exactly_one_row() {
    let domain = Domain::standard().unwrap();
    let mut rows = batch(&domain, 100);
    rows[17].age = 150;
    let bad_id = rows[17].id.clone();

    let validated = validate(&domain, rows, 50);
    let report = &validated.report;
    assert_eq!(report.failures, 1);
    assert_eq!(report.valid_rows, 99);
    assert!(!report.checks.valid_ranges);
    assert!(report.checks.no_nulls);
    assert!(report.checks.valid_enums);
    assert!(report.checks.row_count_passed);
    assert!(validated.valid_rows.iter().all(|r| r.id != bad_id));
}

#[test]
fn each_failure_category_flips_its_flag() {
    let domain = Domain::standard().unwrap();
    let mut rows = batch(&domain, 10);
    rows[0].notes.clear();
    let mut letters = *rows[1].answers.letters();
    letters[3] = 'z';
    rows[1].answers = AnswerVector::new(letters);

    assert_eq!(check_row(&domain, &rows[0]), Err(RowFailure::EmptyField));
    assert_eq!(
        check_row(&domain, &rows[1]),
        Err(RowFailure::InvalidAnswer {
            question: 3,
            answer: 'z'
        })
    );

    let validated = validate(&domain, rows, 1);
    assert_eq!(validated.report.failures, 2);
    assert_eq!(validated.valid_rows.len(), 8);
    assert!(!validated.report.checks.no_nulls);
    assert!(!validated.report.checks.valid_enums);
    assert!(validated.report.checks.valid_ranges);
}

#[test]
fn short_batch_fails_row_count_check() {
    let domain = Domain::standard().unwrap();
    let rows = batch(&domain, 20);
    let validated = validate(&domain, rows, 5000);
    assert!(!validated.report.checks.row_count_passed);
    assert_eq!(validated.report.valid_rows, 20);
}

#[test]
fn empty_valid_set_never_passes() {
    let domain = Domain::standard().unwrap();
    let validated = validate(&domain, Vec::new(), 0);
    assert!(!validated.report.checks.row_count_passed);
    assert_eq!(validated.report.total_generated, 0);
}
