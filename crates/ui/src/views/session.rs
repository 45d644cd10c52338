use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::BackTarget;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{BreadcrumbBar, ViewError};
use crate::vm::{QuestionVm, SessionCompletionVm, map_question, map_session_completion};

#[component]
pub fn SessionView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut selected = use_signal(|| None::<usize>);
    let mut revision = use_signal(|| 0_u64);
    let mut error = use_signal(|| None::<ViewError>);

    // Services live outside the signal graph; re-render when they change.
    let _ = revision();
    let pending = selected();
    let loaded = ctx.with_services(|services| {
        services
            .session()
            .map(|session| (map_question(session, pending), map_session_completion(session)))
    });

    let back_ctx = ctx.clone();
    let back = rsx! {
        button {
            class: "btn btn-secondary back-btn",
            r#type: "button",
            onclick: move |_| {
                let _ = back_ctx.with_services(|services| services.navigate_back(BackTarget::ToTopics));
                let _ = navigator.push(Route::Topics {});
            },
            "← Back to Topics"
        }
    };

    let (question, completion) = match loaded {
        Ok(Some(data)) => data,
        Ok(None) => {
            return rsx! {
                div { class: "page",
                    p { "No practice session in progress." }
                    Link { to: Route::Exams {}, "Choose a topic" }
                }
            };
        }
        Err(err) => {
            return rsx! {
                p { "{err.message()}" }
            };
        }
    };

    let submit_ctx = ctx.clone();
    let on_submit = move |_| {
        match submit_ctx.try_with_services(|services| services.submit(selected()).map(|_| ())) {
            Ok(()) => error.set(None),
            Err(err) => error.set(Some(err)),
        }
        *revision.write() += 1;
    };
    let next_ctx = ctx.clone();
    let on_next = move |_| {
        match next_ctx.try_with_services(|services| services.advance().map(|_| ())) {
            Ok(()) => {
                error.set(None);
                selected.set(None);
            }
            Err(err) => error.set(Some(err)),
        }
        *revision.write() += 1;
    };

    rsx! {
        div { class: "page session-page",
            BreadcrumbBar {}
            {back}
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            if let Some(done) = completion {
                CompletionPanel { completion: done }
            } else if let Some(question) = question {
                QuestionPanel {
                    question: question.clone(),
                    on_select: move |index: usize| selected.set(Some(index)),
                }
                div { class: "session-actions",
                    if question.can_advance {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: on_next,
                            if question.is_last { "Finish Session" } else { "Next Question" }
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !question.can_submit,
                            onclick: on_submit,
                            "Submit Answer"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, on_select: EventHandler<usize>) -> Element {
    let answered = question.feedback.is_some();
    let options = question.options.iter().map(|option| {
        let index = option.index;
        rsx! {
            button {
                class: "{option.state.class()}",
                r#type: "button",
                disabled: answered,
                onclick: move |_| on_select.call(index),
                "{option.label}"
            }
        }
    });

    rsx! {
        div { class: "question-card",
            div { class: "question-header",
                span { class: "question-counter", "{question.counter}" }
                span { class: "status status--{question.difficulty_tone}", "{question.difficulty_label}" }
            }
            p { class: "question-topic", "{question.topic}" }
            h3 { class: "question-text", "{question.text}" }
            div { class: "options", {options} }
            if let Some(feedback) = question.feedback.as_ref() {
                div { class: "feedback-panel",
                    h4 { class: "feedback-result {feedback.result_class}", "{feedback.result_label}" }
                    p { class: "feedback-explanation", "{feedback.explanation}" }
                    if !feedback.key_points.is_empty() {
                        div { class: "key-points",
                            h5 { "Key Points" }
                            ul {
                                for point in feedback.key_points.iter() {
                                    li { "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompletionPanel(completion: SessionCompletionVm) -> Element {
    rsx! {
        div { class: "completion-panel",
            h3 { "{completion.topic}" }
            p { class: "completion-message", "{completion.message}" }
            Link { class: "btn btn-secondary", to: Route::Progress {}, "View Progress" }
        }
    }
}
