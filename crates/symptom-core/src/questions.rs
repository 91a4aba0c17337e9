//! The fixed intake questionnaire.
//!
//! Option meanings live in comments only. The scorer compares letters
//! against condition profiles and never interprets them.

use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: usize = 10;
pub const OPTION_COUNT: usize = 3;

/// Index of the onset/chronicity question.
pub const ONSET_QUESTION: usize = 5;

/// Option letter on the onset question meaning "chronic".
pub const CHRONIC_OPTION: char = 'c';

/// The conventional option letters shared by every standard question.
pub const OPTION_LETTERS: [char; OPTION_COUNT] = ['a', 'b', 'c'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub label: String,
    pub options: [char; OPTION_COUNT],
}

impl Question {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            options: OPTION_LETTERS,
        }
    }

    /// Position of `letter` in this question's option set.
    pub fn position(&self, letter: char) -> Option<usize> {
        self.options.iter().position(|&o| o == letter)
    }

    pub fn offers(&self, letter: char) -> bool {
        self.position(letter).is_some()
    }
}

pub fn standard_questions() -> Vec<Question> {
    vec![
        // a: head/neck, b: chest/respiratory, c: abdomen/back/other
        Question::new("q1", "Location"),
        // a: sharp, b: dull/ache, c: itch/burn
        Question::new("q2", "Nature"),
        // a: high, b: mild, c: none
        Question::new("q3", "Fever"),
        // a: productive cough, b: dry cough/SOB, c: none
        Question::new("q4", "Respiratory"),
        // a: vomiting/diarrhea, b: nausea, c: none
        Question::new("q5", "GI"),
        // a: sudden, b: days, c: chronic
        Question::new("q6", "Onset"),
        // a: exertion, b: food/stress, c: none
        Question::new("q7", "Triggers"),
        // a: high (8-10), b: moderate (4-7), c: low (1-3)
        Question::new("q8", "Severity"),
        // a: recurrent, b: first time, c: unsure
        Question::new("q9", "History"),
        // a: fatigue, b: rash, c: dizzy/none
        Question::new("q10", "Systemic"),
    ]
}
