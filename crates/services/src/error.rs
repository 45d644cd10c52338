//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ExamId, SessionSummaryError};

use crate::sessions::{SessionAction, SessionPhase};

/// Errors emitted by session services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {action} while the session is {phase}")]
    InvalidSessionState {
        action: SessionAction,
        phase: SessionPhase,
    },
    #[error("a session needs at least one question")]
    EmptySession,
    #[error("no answer option selected")]
    NoSelection,
    #[error("option {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

/// Errors emitted while moving through the exam → subject → topic drill-down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("no exam selected")]
    NoExamSelected,
    #[error("no subject selected")]
    NoSubjectSelected,
    #[error("unknown subject `{key}` for {exam}")]
    UnknownSubject { exam: ExamId, key: String },
    #[error("topic `{topic}` is not part of {subject}")]
    UnknownTopic { subject: String, topic: String },
}

/// Errors surfaced by the application context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
