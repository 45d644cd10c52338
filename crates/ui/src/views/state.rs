use services::{AppServicesError, NavigationError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    EmptySession,
    NoSelection,
    InvalidAction,
    UnknownSelection,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::EmptySession => "This session has no questions.",
            ViewError::NoSelection => "Choose an answer before submitting.",
            ViewError::InvalidAction => "That action is not available right now.",
            ViewError::UnknownSelection => "That item is not part of the current selection.",
        }
    }
}

impl From<AppServicesError> for ViewError {
    fn from(err: AppServicesError) -> Self {
        match err {
            AppServicesError::Session(SessionError::EmptySession) => ViewError::EmptySession,
            AppServicesError::Session(SessionError::NoSelection) => ViewError::NoSelection,
            AppServicesError::Session(
                SessionError::InvalidSessionState { .. } | SessionError::OptionOutOfRange { .. },
            ) => ViewError::InvalidAction,
            AppServicesError::Navigation(
                NavigationError::UnknownSubject { .. } | NavigationError::UnknownTopic { .. },
            ) => ViewError::UnknownSelection,
            _ => ViewError::Unknown,
        }
    }
}
