use chrono::{DateTime, Utc};
use std::fmt;
use quiz_core::model::{AnswerRecord, Question, SessionSummary};

use crate::error::SessionError;
use super::phase::{SessionAction, SessionPhase};
use super::progress::SessionProgress;

/// Outcome of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// The next question is now current.
    Next { position: usize },
    /// The last question was answered; the session is finished.
    Complete { completed_at: DateTime<Utc> },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory practice session for one topic.
///
/// Holds a fixed list of questions and steps through them one at a time.
/// The phase is derived from the answers recorded so far:
/// a question is `AwaitingAnswer` until it has a record, then `Answered`
/// until the caller advances. Advancing past the last question completes the session.
pub struct SessionService {
    topic: String,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionService {
    /// Create a session over `questions`.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` if no questions are provided.
    pub fn new(
        topic: impl Into<String>,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptySession);
        }

        Ok(Self {
            topic: topic.into(),
            questions,
            current: 0,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.completed_at.is_some() {
            SessionPhase::Complete
        } else if self.answers.len() > self.current {
            SessionPhase::Answered
        } else {
            SessionPhase::AwaitingAnswer
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_correct()).count()
    }

    /// Number of questions that have not been answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.answers.len())
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.current,
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// The question on screen. After completion this is the last question.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The record for the question on screen, once it has been answered.
    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answers.get(self.current)
    }

    /// Record an answer for the current question.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` unless the session is awaiting an answer,
    /// `SessionError::NoSelection` when `selected` is `None` and
    /// `SessionError::OptionOutOfRange` when it does not index an option.
    /// The session is unchanged on error.
    pub fn submit_answer(
        &mut self,
        selected: Option<usize>,
        answered_at: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionError> {
        let phase = self.phase();
        if phase != SessionPhase::AwaitingAnswer {
            return Err(SessionError::InvalidSessionState {
                action: SessionAction::Submit,
                phase,
            });
        }
        let selected = selected.ok_or(SessionError::NoSelection)?;
        let question = &self.questions[self.current];
        let len = question.options().len();
        if selected >= len {
            return Err(SessionError::OptionOutOfRange {
                index: selected,
                len,
            });
        }

        let elapsed = (answered_at - self.started_at).max(chrono::Duration::zero());
        let record = AnswerRecord::new(question, self.current, selected, elapsed);
        self.answers.push(record);
        Ok(&self.answers[self.current])
    }

    /// Move past an answered question.
    ///
    /// Completion is stamped with `at`, never earlier than the start.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` unless the current question is answered.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<SessionStep, SessionError> {
        let phase = self.phase();
        if phase != SessionPhase::Answered {
            return Err(SessionError::InvalidSessionState {
                action: SessionAction::Advance,
                phase,
            });
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            return Ok(SessionStep::Next {
                position: self.current,
            });
        }

        let completed_at = at.max(self.started_at);
        self.completed_at = Some(completed_at);
        Ok(SessionStep::Complete { completed_at })
    }

    /// Summarize a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` if the session is still running.
    pub fn build_summary(&self) -> Result<SessionSummary, SessionError> {
        let Some(completed_at) = self.completed_at else {
            return Err(SessionError::InvalidSessionState {
                action: SessionAction::RecordCompletion,
                phase: self.phase(),
            });
        };
        Ok(SessionSummary::from_answers(
            self.topic.clone(),
            self.started_at,
            completed_at,
            self.questions.len(),
            &self.answers,
        )?)
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("topic", &self.topic)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
