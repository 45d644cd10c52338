#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod navigation;
pub mod progress_tracker;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use error::{AppServicesError, NavigationError, SessionError};
pub use navigation::{BackTarget, Breadcrumbs, NO_EXAM_LABEL, Navigator, Screen};
pub use progress_tracker::ProgressTracker;

pub use sessions::{
    DEFAULT_QUESTION_COUNT, SessionAction, SessionAnswerResult, SessionLoopService, SessionPhase,
    SessionProgress, SessionService, SessionStep,
};
