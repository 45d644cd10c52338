use quiz_core::model::ExamId;
use services::AppServices;

use super::test_harness::{ViewKind, setup_view_harness};

fn gsi_geology(services: &mut AppServices) {
    services.select_exam(ExamId::Gsi);
    services.select_subject("geology_hydrogeology").unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn exams_view_smoke_lists_both_exams() {
    let mut harness = setup_view_harness(ViewKind::Exams, |_| {});
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Select Exam Type"), "missing placeholder in {html}");
    assert!(html.contains("GSI"), "missing GSI in {html}");
    assert!(html.contains("Graduate Aptitude Test in Engineering"), "missing GATE in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_renders_title_and_cards() {
    let mut harness = setup_view_harness(ViewKind::Subjects, |services| {
        services.select_exam(ExamId::Gsi);
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Select GSI Subject"), "missing title in {html}");
    assert!(html.contains("Geology/Hydrogeology"), "missing subject in {html}");
    assert!(html.contains("Back to Exams"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_without_exam_prompts_for_one() {
    let mut harness = setup_view_harness(ViewKind::Subjects, |_| {});
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose an exam first."), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_topic_cards() {
    let mut harness = setup_view_harness(ViewKind::Topics, gsi_geology);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Geology/Hydrogeology Topics"), "missing title in {html}");
    assert!(
        html.contains("Practice questions related to physical geology"),
        "missing topic description in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Session, |services| {
        gsi_geology(services);
        services.start_topic("Mineralogy").unwrap();
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing counter in {html}");
    assert!(html.contains("B. Augite"), "missing option label in {html}");
    assert!(html.contains("status--success"), "missing difficulty badge in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_feedback_for_wrong_answer() {
    let mut harness = setup_view_harness(ViewKind::Session, |services| {
        gsi_geology(services);
        services.start_topic("Mineralogy").unwrap();
        services.submit(Some(0)).unwrap();
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Incorrect"), "missing result in {html}");
    assert!(html.contains("Key Points"), "missing key points in {html}");
    assert!(
        html.contains("The correct answer is: B. Augite"),
        "missing correct answer in {html}"
    );
    assert!(html.contains("Next Question"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_completion() {
    let mut harness = setup_view_harness(ViewKind::Session, |services| {
        gsi_geology(services);
        services.start_topic("Physical Geology").unwrap();
        for _ in 0..3 {
            services.submit(Some(1)).unwrap();
            services.advance().unwrap();
        }
    });
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Practice session completed! You answered 3 out of 3 questions correctly."),
        "missing completion in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Progress, |_| {});
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0%"), "missing accuracy in {html}");
    assert!(html.contains("0h 0m"), "missing time in {html}");
    assert!(
        html.contains("No activity yet. Start practicing to see your progress!"),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_activity() {
    let mut harness = setup_view_harness(ViewKind::Progress, |_| {});
    harness.with_services(|services| {
        gsi_geology(services);
        services.start_topic("Mineralogy").unwrap();
        for selected in [1, 0, 1] {
            services.submit(Some(selected)).unwrap();
            services.advance().unwrap();
        }
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("67%"), "missing accuracy in {html}");
    assert!(html.contains("Completed practice session"), "missing action in {html}");
    assert!(html.contains("Mineralogy - 2/3 correct"), "missing detail in {html}");
}
