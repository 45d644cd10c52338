use quiz_core::catalog::{Catalog, Subject, filter_topics};
use quiz_core::model::ExamId;
use quiz_core::rng::RandomSource;

use crate::Clock;
use crate::error::AppServicesError;
use crate::navigation::{BackTarget, Breadcrumbs, Navigator, Screen};
use crate::progress_tracker::ProgressTracker;
use crate::sessions::{
    SessionAction, SessionAnswerResult, SessionError, SessionLoopService, SessionPhase,
    SessionService, SessionStep,
};

/// Application context: selection, the live session and process-wide progress.
///
/// Built once by the binary and handed to the UI.
#[derive(Debug)]
pub struct AppServices {
    navigator: Navigator,
    session_loop: SessionLoopService,
    session: Option<SessionService>,
    progress: ProgressTracker,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            navigator: Navigator::new(Catalog::new()),
            session_loop: SessionLoopService::new(clock),
            session: None,
            progress: ProgressTracker::new(),
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: usize) -> Self {
        self.session_loop = self.session_loop.with_question_count(question_count);
        self
    }

    #[must_use]
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.session_loop = self.session_loop.with_random(random);
        self
    }

    /// Mutable access to the clock, so fixed clocks can be advanced in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        self.session_loop.clock_mut()
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.navigator.catalog()
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionService> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    #[must_use]
    pub fn breadcrumbs(&self) -> Breadcrumbs {
        self.navigator.breadcrumbs()
    }

    /// Phase of the live session, `Idle` when there is none.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session
            .as_ref()
            .map_or(SessionPhase::Idle, SessionService::phase)
    }

    pub fn select_exam(&mut self, exam: ExamId) {
        self.session = None;
        self.navigator.select_exam(exam);
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Navigation` if the subject is not part of the selected exam.
    pub fn select_subject(&mut self, key: &str) -> Result<&'static Subject, AppServicesError> {
        let subject = self.navigator.select_subject(key)?;
        self.session = None;
        Ok(subject)
    }

    /// Select `topic` and start a fresh session on it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Navigation` for a topic outside the selected subject and
    /// `AppServicesError::Session` if the session cannot start. Nothing changes on error.
    pub fn start_topic(&mut self, topic: &str) -> Result<&SessionService, AppServicesError> {
        let mut navigator = self.navigator.clone();
        let topic = navigator.select_topic(topic)?;
        let session = self.session_loop.start_session(topic)?;
        self.navigator = navigator;
        Ok(self.session.insert(session))
    }

    /// Step back to `target`, discarding any live session.
    ///
    /// Answers already submitted stay counted in the progress totals.
    pub fn navigate_back(&mut self, target: BackTarget) {
        if let Some(session) = self.session.take() {
            if !session.is_complete() {
                log::debug!(
                    "abandoning session on {} after {} answers",
                    session.topic(),
                    session.answered_count()
                );
            }
        }
        self.navigator.back(target);
    }

    /// Submit `selected` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` with phase `Idle` when no session is live,
    /// otherwise the session's own validation errors.
    pub fn submit(
        &mut self,
        selected: Option<usize>,
    ) -> Result<SessionAnswerResult, AppServicesError> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| no_session(SessionAction::Submit))?;
        Ok(self
            .session_loop
            .answer_current(session, selected, &mut self.progress)?)
    }

    /// Advance past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSessionState` when no session is live or the
    /// current question has not been answered.
    pub fn advance(&mut self) -> Result<SessionStep, AppServicesError> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| no_session(SessionAction::Advance))?;
        Ok(self.session_loop.advance(session, &mut self.progress)?)
    }

    /// Topics of the selected subject matching `query`.
    #[must_use]
    pub fn topics_matching(&self, query: &str) -> Vec<&'static str> {
        filter_topics(self.navigator.topics(), query)
    }
}

fn no_session(action: SessionAction) -> AppServicesError {
    SessionError::InvalidSessionState {
        action,
        phase: SessionPhase::Idle,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::rng::ScriptedRandom;
    use quiz_core::time::fixed_clock;

    use crate::error::NavigationError;

    fn services() -> AppServices {
        AppServices::new(fixed_clock())
            .with_question_count(3)
            .with_random(Box::new(ScriptedRandom::new([0])))
    }

    fn on_topic(services: &mut AppServices, topic: &str) {
        services.select_exam(ExamId::Gsi);
        services.select_subject("geology_hydrogeology").unwrap();
        services.start_topic(topic).unwrap();
    }

    #[test]
    fn submit_without_session_is_idle_error() {
        let mut services = services();
        let err = services.submit(Some(0)).unwrap_err();
        assert_eq!(
            err,
            AppServicesError::Session(SessionError::InvalidSessionState {
                action: SessionAction::Submit,
                phase: SessionPhase::Idle,
            })
        );
        assert_eq!(services.progress().attempted(), 0);
    }

    #[test]
    fn start_topic_validates_before_changing_state() {
        let mut services = services();
        services.select_exam(ExamId::Gsi);
        services.select_subject("geology_hydrogeology").unwrap();

        let err = services.start_topic("Seismology").unwrap_err();
        assert!(matches!(
            err,
            AppServicesError::Navigation(NavigationError::UnknownTopic { .. })
        ));
        assert!(services.session().is_none());
        assert_eq!(services.screen(), Screen::Topics);
    }

    #[test]
    fn zero_length_session_keeps_topic_screen() {
        let mut services = services().with_question_count(0);
        services.select_exam(ExamId::Gsi);
        services.select_subject("geology_hydrogeology").unwrap();

        let err = services.start_topic("Mineralogy").unwrap_err();
        assert_eq!(err, AppServicesError::Session(SessionError::EmptySession));
        assert_eq!(services.screen(), Screen::Topics);
    }

    #[test]
    fn abandoning_a_session_keeps_answer_counters_only() {
        let mut services = services();
        on_topic(&mut services, "Mineralogy");
        services.submit(Some(1)).unwrap();

        services.navigate_back(BackTarget::ToTopics);

        assert!(services.session().is_none());
        assert_eq!(services.phase(), SessionPhase::Idle);
        assert_eq!(services.progress().attempted(), 1);
        assert_eq!(services.progress().correct(), 1);
        assert_eq!(services.progress().minutes_spent(), 0);
        assert!(services.progress().activity().is_empty());
        assert_eq!(services.progress().topics_completed(), 0);
    }

    #[test]
    fn completed_session_stays_until_navigation() {
        let mut services = services();
        on_topic(&mut services, "Physical Geology");
        for _ in 0..3 {
            services.submit(Some(1)).unwrap();
            services.advance().unwrap();
        }

        assert_eq!(services.phase(), SessionPhase::Complete);
        assert_eq!(services.screen(), Screen::Session);
        assert_eq!(services.progress().activity().len(), 1);
        assert!(services.advance().is_err());
    }

    #[test]
    fn topic_filter_uses_selected_subject() {
        let mut services = services();
        assert!(services.topics_matching("").is_empty());

        services.select_exam(ExamId::Gsi);
        services.select_subject("geology_hydrogeology").unwrap();
        assert_eq!(
            services.topics_matching("petrology"),
            ["Igneous Petrology", "Metamorphic Petrology"]
        );
    }
}
