use chrono::Duration;
use quiz_core::model::{COMPLETED_SESSION_ACTION, ExamId};
use quiz_core::rng::ScriptedRandom;
use quiz_core::time::fixed_now;
use services::{
    AppServices, AppServicesError, BackTarget, Clock, Screen, SessionError, SessionPhase,
    SessionStep,
};

fn services() -> AppServices {
    AppServices::new(Clock::fixed(fixed_now())).with_random(Box::new(ScriptedRandom::new([0])))
}

fn run_session(services: &mut AppServices, topic: &str, selected: usize, minutes: i64) {
    services.start_topic(topic).unwrap();
    let total = services.session().unwrap().total_questions();
    for i in 0..total {
        services.submit(Some(selected)).unwrap();
        if i + 1 == total {
            services.clock_mut().advance(Duration::minutes(minutes));
        }
        services.advance().unwrap();
    }
}

#[test]
fn full_practice_flow_updates_progress() {
    let mut services = services();
    assert_eq!(services.screen(), Screen::Exams);

    services.select_exam(ExamId::Gate);
    services.select_subject("common_section").unwrap();
    let session = services.start_topic("Seismology").unwrap();
    assert_eq!(session.total_questions(), 10);
    assert_eq!(services.phase(), SessionPhase::AwaitingAnswer);

    for i in 0..10 {
        let result = services.submit(Some(if i < 7 { 1 } else { 0 })).unwrap();
        assert_eq!(result.record.position(), i);
        assert_eq!(services.phase(), SessionPhase::Answered);

        if i == 9 {
            services.clock_mut().advance(Duration::seconds(5 * 60 + 30));
        }
        match services.advance().unwrap() {
            SessionStep::Next { position } => assert_eq!(position, i + 1),
            SessionStep::Complete { completed_at } => {
                assert_eq!(i, 9);
                assert_eq!(completed_at, fixed_now() + Duration::seconds(330));
            }
        }
    }

    assert_eq!(services.phase(), SessionPhase::Complete);
    let progress = services.progress();
    assert_eq!(progress.attempted(), 10);
    assert_eq!(progress.correct(), 7);
    assert_eq!(progress.accuracy_rate(), 70);
    assert_eq!(progress.minutes_spent(), 5);
    assert_eq!(progress.topics_completed(), 1);

    let entry = progress.activity().get(0).unwrap();
    assert_eq!(entry.action(), COMPLETED_SESSION_ACTION);
    assert_eq!(entry.topic(), "Seismology");
    assert_eq!((entry.correct(), entry.questions()), (7, 10));

    services.navigate_back(BackTarget::ToTopics);
    assert_eq!(services.screen(), Screen::Topics);
    assert_eq!(services.phase(), SessionPhase::Idle);
}

#[test]
fn repeated_topic_accumulates_without_duplicating() {
    let mut services = services();
    services.select_exam(ExamId::Gsi);
    services.select_subject("geology_hydrogeology").unwrap();

    run_session(&mut services, "Mineralogy", 1, 2);
    services.navigate_back(BackTarget::ToTopics);
    run_session(&mut services, "Mineralogy", 0, 3);

    let progress = services.progress();
    assert_eq!(progress.attempted(), 20);
    assert_eq!(progress.correct(), 10);
    assert_eq!(progress.accuracy_rate(), 50);
    assert_eq!(progress.minutes_spent(), 5);
    assert_eq!(progress.completed_topics().collect::<Vec<_>>(), ["Mineralogy"]);
    assert_eq!(progress.activity().len(), 2);
    assert_eq!(progress.activity().get(0).unwrap().correct(), 0);
    assert_eq!(progress.activity().get(1).unwrap().correct(), 10);
}

#[test]
fn double_submit_is_rejected_and_counters_hold() {
    let mut services = services();
    services.select_exam(ExamId::Gsi);
    services.select_subject("geology_hydrogeology").unwrap();
    services.start_topic("Structural Geology").unwrap();

    services.submit(Some(1)).unwrap();
    let err = services.submit(Some(1)).unwrap_err();
    assert!(matches!(
        err,
        AppServicesError::Session(SessionError::InvalidSessionState {
            phase: SessionPhase::Answered,
            ..
        })
    ));
    assert_eq!(services.progress().attempted(), 1);
    assert_eq!(services.progress().correct(), 1);
}

#[test]
fn leaving_mid_session_discards_it() {
    let mut services = services();
    services.select_exam(ExamId::Gate);
    services.select_subject("geophysics").unwrap();
    services.start_topic("Well Logging").unwrap();
    services.submit(Some(0)).unwrap();

    services.navigate_back(BackTarget::ToExams);

    assert_eq!(services.screen(), Screen::Exams);
    assert!(services.session().is_none());
    assert_eq!(services.progress().attempted(), 1);
    assert!(services.progress().activity().is_empty());
    assert!(services.advance().is_err());
}
