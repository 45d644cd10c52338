mod activity;
mod answer;
mod ids;
mod question;
mod session;

pub use ids::{ExamId, ParseExamIdError};

pub use activity::{ACTIVITY_LOG_CAPACITY, ActivityEntry, ActivityLog, COMPLETED_SESSION_ACTION};
pub use answer::AnswerRecord;
pub use question::{Difficulty, Question, QuestionError, option_letter};
pub use session::{SessionSummary, SessionSummaryError};
