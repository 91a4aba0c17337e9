//! The hand-authored condition table.
//!
//! Weights: 3 = strong relevance, 2 = moderate, 1 = weak. Question indices
//! are zero-based (index 0 is q1).

use crate::profile::ConditionSpec;

pub fn standard_conditions() -> Vec<ConditionSpec> {
    vec![
        ConditionSpec::new("AC_PHARY", "Acute Pharyngitis")
            .specialties(&["GP", "ENT"])
            .weights(0, &[('a', 3)])
            .weights(1, &[('a', 2), ('c', 2)])
            .weights(2, &[('a', 2), ('b', 2)])
            .weights(3, &[('c', 1)])
            .weights(9, &[('a', 2)]),
        ConditionSpec::new("VIR_FLU", "Viral Influenza")
            .specialties(&["GP", "PULM"])
            .weights(0, &[('c', 1)])
            .weights(2, &[('a', 3)])
            .weights(3, &[('b', 2)])
            .weights(5, &[('a', 2)])
            .weights(9, &[('a', 3)]),
        ConditionSpec::new("AC_BRONC", "Acute Bronchitis")
            .specialties(&["GP", "PULM"])
            .weights(0, &[('b', 3)])
            .weights(2, &[('b', 1)])
            .weights(3, &[('a', 3)])
            .weights(5, &[('b', 2)]),
        ConditionSpec::new("PNEUMONIA", "Pneumonia")
            .specialties(&["GP", "PULM"])
            .weights(0, &[('b', 3)])
            .weights(2, &[('a', 3)])
            .weights(3, &[('a', 2), ('b', 2)])
            .weights(7, &[('b', 2)])
            .weights(9, &[('a', 2)]),
        ConditionSpec::new("AC_MI", "Acute Myocardial Infarction")
            .specialties(&["ER", "CARDIO"])
            .emergency()
            .weights(0, &[('b', 3)])
            .weights(1, &[('b', 3)])
            .weights(3, &[('b', 2)])
            .weights(5, &[('a', 3)])
            .weights(6, &[('a', 2)])
            .weights(7, &[('a', 3)])
            .weights(9, &[('c', 2)]),
        ConditionSpec::new("GERD", "Gastroesophageal Reflux")
            .specialties(&["GP", "GASTRO"])
            .chronic_onset()
            .weights(0, &[('b', 2), ('c', 1)])
            .weights(1, &[('c', 3)])
            .weights(4, &[('b', 2)])
            .weights(5, &[('c', 2)])
            .weights(6, &[('b', 2)]),
        ConditionSpec::new("GASTRO_ENT", "Gastroenteritis")
            .specialties(&["GP", "GASTRO"])
            .weights(0, &[('c', 3)])
            .weights(2, &[('b', 1)])
            .weights(4, &[('a', 3)])
            .weights(5, &[('a', 2)]),
        ConditionSpec::new("AC_APPEN", "Acute Appendicitis")
            .specialties(&["ER", "GASTRO"])
            .emergency()
            .weights(0, &[('c', 3)])
            .weights(1, &[('a', 3)])
            .weights(2, &[('b', 2)])
            .weights(4, &[('b', 2)])
            .weights(5, &[('a', 2)])
            .weights(7, &[('a', 2)]),
        ConditionSpec::new("MIGRAINE", "Migraine")
            .specialties(&["NEURO", "GP"])
            .weights(0, &[('a', 3)])
            .weights(1, &[('b', 2)])
            .weights(4, &[('b', 2)])
            .weights(6, &[('b', 2)])
            .weights(8, &[('a', 2)]),
        ConditionSpec::new("TENS_HEAD", "Tension Headache")
            .specialties(&["GP", "NEURO"])
            .weights(0, &[('a', 3)])
            .weights(1, &[('b', 3)])
            .weights(7, &[('c', 2)])
            .weights(8, &[('a', 1)]),
        ConditionSpec::new("AC_SINUS", "Acute Sinusitis")
            .specialties(&["GP", "ENT"])
            .weights(0, &[('a', 3)])
            .weights(1, &[('b', 2)])
            .weights(3, &[('c', 1)])
            .weights(5, &[('b', 2)]),
        ConditionSpec::new("ALLER_RHIN", "Allergic Rhinitis")
            .specialties(&["GP", "ENT"])
            .chronic_onset()
            .weights(0, &[('a', 2)])
            .weights(1, &[('c', 2)])
            .weights(3, &[('c', 2)])
            .weights(5, &[('c', 2)])
            .weights(6, &[('c', 2)]),
        ConditionSpec::new("OSTEO_ARTH", "Osteoarthritis")
            .specialties(&["GP", "ORTHO"])
            .chronic_onset()
            .weights(0, &[('c', 2)])
            .weights(1, &[('b', 2)])
            .weights(5, &[('c', 3)])
            .weights(6, &[('a', 2)])
            .weights(8, &[('a', 2)]),
        ConditionSpec::new("LUMBAGO", "Acute Lumbago")
            .specialties(&["GP", "ORTHO"])
            .weights(0, &[('c', 3)])
            .weights(1, &[('b', 1), ('a', 1)])
            .weights(5, &[('a', 2)])
            .weights(6, &[('a', 3)]),
        ConditionSpec::new("GEN_ANX", "Generalized Anxiety")
            .specialties(&["GP", "PSYCH"])
            .chronic_onset()
            .weights(0, &[('b', 1), ('c', 1)])
            .weights(1, &[('b', 1)])
            .weights(5, &[('c', 2)])
            .weights(6, &[('b', 3)])
            .weights(9, &[('a', 2)]),
        ConditionSpec::new("UTI_SIMPLE", "Uncomplicated UTI")
            .specialties(&["GP"])
            .weights(0, &[('c', 3)])
            .weights(1, &[('c', 3)])
            .weights(2, &[('b', 1)])
            .weights(5, &[('b', 2)]),
        ConditionSpec::new("CON_DERM", "Contact Dermatitis")
            .specialties(&["GP", "DERM"])
            .weights(0, &[('c', 1)])
            .weights(1, &[('c', 3)])
            .weights(6, &[('c', 2)])
            .weights(9, &[('b', 3)]),
        ConditionSpec::new("AC_URTIC", "Acute Urticaria")
            .specialties(&["GP", "DERM"])
            .weights(1, &[('c', 3)])
            .weights(5, &[('a', 2)])
            .weights(9, &[('b', 3)]),
        ConditionSpec::new("HYPERTEN", "Hypertension (Uncontrolled)")
            .specialties(&["GP", "CARDIO"])
            .chronic_onset()
            .weights(0, &[('a', 1)])
            .weights(5, &[('c', 3)])
            .weights(8, &[('a', 2)])
            .weights(9, &[('c', 2)]),
        ConditionSpec::new("STABLE_ANG", "Stable Angina")
            .specialties(&["CARDIO", "GP"])
            .chronic_onset()
            .weights(0, &[('b', 3)])
            .weights(1, &[('b', 2)])
            .weights(5, &[('c', 2)])
            .weights(6, &[('a', 3)])
            .weights(8, &[('a', 2)]),
    ]
}
