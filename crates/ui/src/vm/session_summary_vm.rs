use services::SessionService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCompletionVm {
    pub topic: String,
    pub message: String,
}

#[must_use]
pub fn completion_message(correct: usize, total: usize) -> String {
    format!(
        "Practice session completed! You answered {correct} out of {total} questions correctly."
    )
}

/// End-of-session banner; `None` while the session is still running.
#[must_use]
pub fn map_session_completion(session: &SessionService) -> Option<SessionCompletionVm> {
    session.is_complete().then(|| SessionCompletionVm {
        topic: session.topic().to_string(),
        message: completion_message(session.correct_count(), session.total_questions()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Difficulty, Question};
    use quiz_core::time::fixed_now;

    #[test]
    fn message_reports_score() {
        assert_eq!(
            completion_message(7, 10),
            "Practice session completed! You answered 7 out of 10 questions correctly."
        );
    }

    #[test]
    fn only_completed_sessions_map() {
        let question =
            Question::new("Q?", vec!["a".into(), "b".into()], 0, "E", "Geodesy", Difficulty::Hard)
                .unwrap();
        let mut session = SessionService::new("Geodesy", vec![question], fixed_now()).unwrap();
        assert!(map_session_completion(&session).is_none());

        session.submit_answer(Some(0), fixed_now()).unwrap();
        session.advance(fixed_now()).unwrap();
        let vm = map_session_completion(&session).unwrap();
        assert_eq!(vm.topic, "Geodesy");
        assert!(vm.message.contains("1 out of 1"));
    }
}
