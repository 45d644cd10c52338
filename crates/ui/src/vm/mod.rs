mod catalog_vm;
mod progress_vm;
mod question_vm;
mod session_summary_vm;
mod time_fmt;

pub use catalog_vm::{
    ExamCardVm, SubjectCardVm, TopicCardVm, breadcrumb_items, map_exam_cards, map_subject_cards,
    map_topic_cards, subjects_title, topics_title,
};
pub use progress_vm::{ActivityItemVm, EMPTY_ACTIVITY_MESSAGE, ProgressVm, map_progress};
pub use question_vm::{
    FeedbackVm, OptionState, OptionVm, QuestionVm, difficulty_tone, map_question,
};
pub use session_summary_vm::{SessionCompletionVm, completion_message, map_session_completion};
pub use time_fmt::{format_hours_minutes, format_local_date};
