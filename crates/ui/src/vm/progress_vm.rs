use quiz_core::model::ActivityEntry;
use services::ProgressTracker;

use crate::vm::time_fmt::{format_hours_minutes, format_local_date};

pub const EMPTY_ACTIVITY_MESSAGE: &str = "No activity yet. Start practicing to see your progress!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityItemVm {
    pub action: String,
    pub detail: String,
    pub date: String,
}

impl From<&ActivityEntry> for ActivityItemVm {
    fn from(entry: &ActivityEntry) -> Self {
        Self {
            action: entry.action().to_string(),
            detail: format!(
                "{} - {}/{} correct",
                entry.topic(),
                entry.correct(),
                entry.questions()
            ),
            date: format_local_date(entry.created_at()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub attempted: u32,
    pub accuracy_label: String,
    pub topics_completed: usize,
    pub time_label: String,
    /// Newest first.
    pub activity: Vec<ActivityItemVm>,
}

impl ProgressVm {
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.activity.is_empty().then_some(EMPTY_ACTIVITY_MESSAGE)
    }
}

#[must_use]
pub fn map_progress(progress: &ProgressTracker) -> ProgressVm {
    ProgressVm {
        attempted: progress.attempted(),
        accuracy_label: format!("{}%", progress.accuracy_rate()),
        topics_completed: progress.topics_completed(),
        time_label: format_hours_minutes(progress.minutes_spent()),
        activity: progress.activity().iter().map(ActivityItemVm::from).collect(),
    }
}
