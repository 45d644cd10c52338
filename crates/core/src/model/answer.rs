use chrono::Duration;

use crate::model::Question;

/// One submitted answer within a session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    position: usize,
    selected: usize,
    is_correct: bool,
    elapsed: Duration,
}

impl AnswerRecord {
    /// Records `selected` for the question at `position`; correctness is derived from `question`.
    #[must_use]
    pub fn new(question: &Question, position: usize, selected: usize, elapsed: Duration) -> Self {
        Self {
            position,
            selected,
            is_correct: question.is_correct(selected),
            elapsed,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Time since the session started when this answer was submitted.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
