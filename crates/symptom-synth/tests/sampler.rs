use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use symptom_core::Domain;
use symptom_core::profile::ConditionSpec;
use symptom_core::questions::{QUESTION_COUNT, standard_questions};
use symptom_core::specialties::standard_specialties;
use symptom_synth::SynthError;
use symptom_synth::sampler::{AnswerSampler, NOISE_PROBABILITY, option_weights};
use symptom_synth::weighted::WeightedTable;

fn emergency_domain() -> Domain {
    Domain::new(
        standard_questions(),
        standard_specialties(),
        vec![
            ConditionSpec::new("EMERG", "Emergency")
                .specialties(&["ER"])
                .emergency()
                .weights(0, &[('a', 3)]),
        ],
    )
    .unwrap()
}

#[test]
fn declared_options_are_boosted() {
    let domain = Domain::standard().unwrap();
    let pharyngitis = domain.condition("AC_PHARY").unwrap();

    assert_eq!(option_weights(pharyngitis, 0), [13, 1, 1]);
    assert_eq!(option_weights(pharyngitis, 1), [9, 1, 9]);
    assert_eq!(option_weights(pharyngitis, 4), [1, 1, 1]);
}

#[test]
fn forced_emergency_target_favors_profile_answer() {
    let domain = emergency_domain();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let trials = 1000;

    let hits = (0..trials)
        .map(|_| sampler.sample_answers("EMERG", &mut rng, 0.0).unwrap())
        .filter(|answers| answers.get(0) == Some('a'))
        .count();

    // Exact probability is 13/15.
    let rate = hits as f64 / trials as f64;
    assert!(rate > 0.80, "rate {rate}");
    assert!(rate > 1.0 / 3.0);
}

#[test]
fn undeclared_questions_stay_roughly_uniform() {
    let domain = emergency_domain();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut counts = [0usize; 3];

    for _ in 0..3000 {
        let answers = sampler.sample_answers("EMERG", &mut rng, 0.0).unwrap();
        let slot = (answers.get(4).unwrap() as u8 - b'a') as usize;
        counts[slot] += 1;
    }

    for count in counts {
        assert!((800..=1200).contains(&count), "counts {counts:?}");
    }
}

#[test]
fn full_noise_ignores_profile() {
    let domain = emergency_domain();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let trials = 3000;

    let hits = (0..trials)
        .map(|_| sampler.sample_answers("EMERG", &mut rng, 1.0).unwrap())
        .filter(|answers| answers.get(0) == Some('a'))
        .count();

    let rate = hits as f64 / trials as f64;
    assert!((0.28..=0.39).contains(&rate), "rate {rate}");
}

#[test]
fn answers_cover_every_question_with_offered_letters() {
    let domain = Domain::standard().unwrap();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for condition in domain.conditions() {
        let answers = sampler.sample_answers(&condition.code, &mut rng, NOISE_PROBABILITY).unwrap();
        assert_eq!(answers.letters().len(), QUESTION_COUNT);
        for (index, letter) in answers.iter().enumerate() {
            assert!(domain.question(index).unwrap().offers(letter));
        }
    }
}

#[test]
fn same_seed_same_answers() {
    let domain = Domain::standard().unwrap();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..50 {
        assert_eq!(
            sampler.sample_answers("GERD", &mut a, NOISE_PROBABILITY).unwrap(),
            sampler.sample_answers("GERD", &mut b, NOISE_PROBABILITY).unwrap(),
        );
    }
}

#[test]
fn unknown_target_is_invalid_key() {
    let domain = Domain::standard().unwrap();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = sampler.sample_answers("NOPE", &mut rng, NOISE_PROBABILITY).unwrap_err();
    assert!(matches!(err, SynthError::InvalidKey(code) if code == "NOPE"));
}

#[test]
fn prebuilt_tables_consume_the_stream_like_per_question_tables() {
    let domain = Domain::standard().unwrap();
    let sampler = AnswerSampler::new(&domain).unwrap();
    let condition = domain.condition("AC_MI").unwrap();
    let mut a = ChaCha8Rng::seed_from_u64(5);
    let mut b = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..50 {
        let answers = sampler.sample_answers("AC_MI", &mut a, NOISE_PROBABILITY).unwrap();

        let mut expected = Vec::new();
        for (index, question) in domain.questions().iter().enumerate() {
            let table = WeightedTable::new(
                question.options.iter().copied().zip(option_weights(condition, index)),
            )
            .unwrap();
            let mut answer = *table.sample(&mut b);
            if b.r#gen::<f64>() < NOISE_PROBABILITY {
                answer = question.options[b.gen_range(0..3)];
            }
            expected.push(answer);
        }

        assert_eq!(answers.letters().to_vec(), expected);
    }
}
