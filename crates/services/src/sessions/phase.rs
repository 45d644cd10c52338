use std::fmt;

/// Where a practice session is in its lifecycle.
///
/// `Idle` means no session exists; the others are reported by a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Idle,
    AwaitingAnswer,
    Answered,
    Complete,
}

impl SessionPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::AwaitingAnswer => "awaiting an answer",
            SessionPhase::Answered => "answered",
            SessionPhase::Complete => "complete",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation attempted against a session, reported in state errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionAction {
    Submit,
    Advance,
    RecordCompletion,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionAction::Submit => "submit an answer",
            SessionAction::Advance => "advance",
            SessionAction::RecordCompletion => "record completion",
        })
    }
}
