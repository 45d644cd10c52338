use std::fmt;

use quiz_core::model::{AnswerRecord, Question};
use quiz_core::question_bank::QuestionBank;
use quiz_core::rng::{RandomSource, ThreadRandom};

use crate::Clock;
use crate::error::SessionError;
use crate::progress_tracker::ProgressTracker;
use super::service::{SessionService, SessionStep};

/// Questions drawn per session unless configured otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Result of answering the current question in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswerResult {
    pub record: AnswerRecord,
    pub correct_option: usize,
    pub is_last: bool,
}

/// Orchestrates session start, answering and completion against the progress tracker.
pub struct SessionLoopService {
    clock: Clock,
    bank: QuestionBank,
    random: Box<dyn RandomSource>,
    question_count: usize,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            bank: QuestionBank::new(),
            random: Box::new(ThreadRandom),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: usize) -> Self {
        self.question_count = question_count;
        self
    }

    #[must_use]
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable access to the clock, so fixed clocks can be advanced in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Start a new session on `topic`, drawing each question independently.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` when the question count is zero.
    pub fn start_session(&mut self, topic: &str) -> Result<SessionService, SessionError> {
        if self.question_count == 0 {
            return Err(SessionError::EmptySession);
        }

        let questions: Vec<Question> = (0..self.question_count)
            .map(|_| self.bank.generate_question(topic, self.random.as_mut()))
            .collect();
        log::debug!(
            "starting session on {topic:?} with {} questions ({:?})",
            questions.len(),
            self.bank.source_for(topic)
        );

        SessionService::new(topic, questions, self.clock.now())
    }

    /// Answer the current question and count it in `progress`.
    ///
    /// # Errors
    ///
    /// Returns the session's validation errors; neither the session nor `progress`
    /// changes on error.
    pub fn answer_current(
        &self,
        session: &mut SessionService,
        selected: Option<usize>,
        progress: &mut ProgressTracker,
    ) -> Result<SessionAnswerResult, SessionError> {
        let answered_at = self.clock.now();
        let record = session.submit_answer(selected, answered_at)?.clone();
        progress.record_answer(record.is_correct());

        let correct_option = session
            .current_question()
            .map_or(0, Question::correct);
        Ok(SessionAnswerResult {
            is_last: record.position() + 1 == session.total_questions(),
            correct_option,
            record,
        })
    }

    /// Move to the next question, recording the session in `progress` when it completes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` unless the current question is answered.
    pub fn advance(
        &self,
        session: &mut SessionService,
        progress: &mut ProgressTracker,
    ) -> Result<SessionStep, SessionError> {
        let step = session.advance(self.clock.now())?;
        if let SessionStep::Complete { .. } = step {
            progress.record_session_completion(session)?;
        }
        Ok(step)
    }
}

impl fmt::Debug for SessionLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionLoopService")
            .field("clock", &self.clock)
            .field("question_count", &self.question_count)
            .finish_non_exhaustive()
    }
}
