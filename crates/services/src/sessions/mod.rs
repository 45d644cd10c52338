mod phase;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use phase::{SessionAction, SessionPhase};
pub use progress::SessionProgress;
pub use service::{SessionService, SessionStep};
pub use workflow::{DEFAULT_QUESTION_COUNT, SessionAnswerResult, SessionLoopService};
