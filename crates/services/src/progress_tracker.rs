use indexmap::IndexSet;
use quiz_core::model::{ActivityEntry, ActivityLog, COMPLETED_SESSION_ACTION};

use crate::sessions::{SessionError, SessionService};

/// Cross-session statistics for the running process.
///
/// Starts zeroed and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    attempted: u32,
    correct: u32,
    completed_topics: IndexSet<String>,
    minutes_spent: u32,
    activity: ActivityLog,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one submitted answer.
    pub fn record_answer(&mut self, is_correct: bool) {
        self.attempted = self.attempted.saturating_add(1);
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    /// Folds a finished session into the totals and logs it as the newest activity.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` if `session` is not complete.
    pub fn record_session_completion(
        &mut self,
        session: &SessionService,
    ) -> Result<ActivityEntry, SessionError> {
        let summary = session.build_summary()?;
        let minutes = summary.minutes();

        self.minutes_spent = self.minutes_spent.saturating_add(minutes);
        self.completed_topics.insert(summary.topic().to_string());
        let entry = ActivityEntry::new(
            COMPLETED_SESSION_ACTION,
            summary.topic(),
            summary.questions(),
            summary.correct(),
            minutes,
            summary.completed_at(),
        );
        self.activity.push_front(entry.clone());

        log::debug!(
            "session on {} completed: {}/{} correct in {}m",
            summary.topic(),
            summary.correct(),
            summary.questions(),
            minutes
        );

        Ok(entry)
    }

    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Percentage of correct answers, rounded half up; 0 before any attempt.
    #[must_use]
    pub fn accuracy_rate(&self) -> u32 {
        if self.attempted == 0 {
            return 0;
        }
        let attempted = u64::from(self.attempted);
        let rate = (200 * u64::from(self.correct) + attempted) / (2 * attempted);
        u32::try_from(rate).unwrap_or(100)
    }

    /// Completed topics in the order they were first finished.
    pub fn completed_topics(&self) -> impl Iterator<Item = &str> {
        self.completed_topics.iter().map(String::as_str)
    }

    #[must_use]
    pub fn topics_completed(&self) -> usize {
        self.completed_topics.len()
    }

    #[must_use]
    pub fn minutes_spent(&self) -> u32 {
        self.minutes_spent
    }

    /// Recent activity, newest first.
    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}
