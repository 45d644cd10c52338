use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Maximum number of entries kept in the recent-activity log.
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

/// Action label written for every completed practice session.
pub const COMPLETED_SESSION_ACTION: &str = "Completed practice session";

/// Summary line for one completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    action: String,
    topic: String,
    questions: u32,
    correct: u32,
    minutes: u32,
    created_at: DateTime<Utc>,
}

impl ActivityEntry {
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        topic: impl Into<String>,
        questions: u32,
        correct: u32,
        minutes: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            action: action.into(),
            topic: topic.into(),
            questions,
            correct,
            minutes,
            created_at,
        }
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fixed-capacity log, newest entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(ACTIVITY_LOG_CAPACITY)
    }

    /// A log holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Inserts `entry` at the front and returns the evicted oldest entry, if any.
    pub fn push_front(&mut self, entry: ActivityEntry) -> Option<ActivityEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ActivityEntry> {
        self.entries.get(index)
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }
}
