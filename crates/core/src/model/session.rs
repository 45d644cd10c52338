use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::AnswerRecord;
use crate::time::whole_minutes_between;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },

    #[error("correct answers ({correct}) exceed questions ({questions})")]
    CountMismatch { questions: u32, correct: u32 },
}

/// Aggregate result of one completed practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    topic: String,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    questions: u32,
    correct: u32,
}

impl SessionSummary {
    /// Build a summary from raw counts.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::CountMismatch` if `correct` exceeds `questions`.
    pub fn new(
        topic: impl Into<String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        questions: u32,
        correct: u32,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if correct > questions {
            return Err(SessionSummaryError::CountMismatch { questions, correct });
        }

        Ok(Self {
            topic: topic.into(),
            started_at,
            completed_at,
            questions,
            correct,
        })
    }

    /// Build a summary for a session of `question_count` questions from its answer records.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::TooManyQuestions` if the count cannot fit in `u32`,
    /// otherwise the same errors as [`SessionSummary::new`].
    pub fn from_answers(
        topic: impl Into<String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        question_count: usize,
        answers: &[AnswerRecord],
    ) -> Result<Self, SessionSummaryError> {
        let questions = u32::try_from(question_count)
            .map_err(|_| SessionSummaryError::TooManyQuestions { len: question_count })?;
        let correct = answers.iter().filter(|answer| answer.is_correct()).count();
        let correct = u32::try_from(correct)
            .map_err(|_| SessionSummaryError::TooManyQuestions { len: correct })?;

        Self::new(topic, started_at, completed_at, questions, correct)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Session length floored to whole minutes.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        whole_minutes_between(self.started_at, self.completed_at)
    }
}
