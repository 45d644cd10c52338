use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct option {correct} is out of range for {len} options")]
    CorrectOutOfRange { correct: usize, len: usize },
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Difficulty tag shown as a badge next to each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, in the order the generic generator draws from.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question bound to a topic.
///
/// The correct index is validated at construction and the value is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
    topic: String,
    difficulty: Difficulty,
}

impl Question {
    /// Builds a question, checking the option invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank text,
    /// `QuestionError::TooFewOptions` for fewer than two options and
    /// `QuestionError::CorrectOutOfRange` when `correct` does not index an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if correct >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                correct,
                len: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            correct,
            explanation: explanation.into(),
            topic: topic.into(),
            difficulty,
        })
    }

    /// Builds a question from compile-time content whose invariants are covered by tests.
    pub(crate) fn from_static(
        text: String,
        options: Vec<String>,
        correct: usize,
        explanation: String,
        topic: String,
        difficulty: Difficulty,
    ) -> Self {
        debug_assert!(options.len() >= 2 && correct < options.len());
        Self {
            text,
            options,
            correct,
            explanation,
            topic,
            difficulty,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }
}

/// Letter prefix for an option index: 0 → `A`, 1 → `B`, …
///
/// Indices past `Z` render as `?`.
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|offset| *offset < 26)
        .map_or('?', |offset| char::from(b'A' + offset))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let err = Question::new("Q?", options(4), 4, "E", "T", Difficulty::Easy).unwrap_err();
        assert_eq!(err, QuestionError::CorrectOutOfRange { correct: 4, len: 4 });
    }

    #[test]
    fn rejects_single_option_and_blank_text() {
        let err = Question::new("Q?", options(1), 0, "E", "T", Difficulty::Easy).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { len: 1 });
        let err = Question::new("   ", options(2), 0, "E", "T", Difficulty::Easy).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn correctness_is_index_equality() {
        let question = Question::new("Q?", options(3), 2, "E", "T", Difficulty::Hard).unwrap();
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
        assert_eq!(question.correct_option(), "option 2");
    }

    #[test]
    fn letters_follow_the_alphabet() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
        assert_eq!(option_letter(26), '?');
    }

    #[test]
    fn difficulty_labels_are_lowercase() {
        let labels: Vec<_> = Difficulty::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["easy", "medium", "hard"]);
    }
}
