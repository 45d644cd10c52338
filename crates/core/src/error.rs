use thiserror::Error;

use crate::model::{QuestionError, SessionSummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
