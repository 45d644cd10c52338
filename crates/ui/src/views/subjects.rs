use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::BackTarget;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{BreadcrumbBar, ViewError};
use crate::vm::{map_subject_cards, subjects_title};

#[component]
pub fn SubjectsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let error = use_signal(|| None::<ViewError>);

    let loaded = ctx.with_services(|services| {
        let nav = services.navigator();
        nav.exam()
            .map(|exam| (subjects_title(exam), map_subject_cards(nav.subjects())))
    });
    let (title, cards) = match loaded {
        Ok(Some(data)) => data,
        Ok(None) => {
            return rsx! {
                div { class: "page",
                    p { "Choose an exam first." }
                    Link { to: Route::Exams {}, "Go to exams" }
                }
            };
        }
        Err(err) => {
            return rsx! {
                p { "{err.message()}" }
            };
        }
    };

    let subject_cards = cards.into_iter().map(|card| {
        let ctx = ctx.clone();
        let nav = navigator;
        let mut error = error;
        let key = card.key;
        rsx! {
            div {
                class: "subject-card",
                onclick: move |_| {
                    match ctx.try_with_services(|services| services.select_subject(key)) {
                        Ok(_) => {
                            error.set(None);
                            let _ = nav.push(Route::Topics {});
                        }
                        Err(err) => error.set(Some(err)),
                    }
                },
                h3 { "{card.name}" }
                p { "{card.description}" }
                span { class: "subject-meta", "{card.topic_count_label}" }
            }
        }
    });

    let back_ctx = ctx.clone();
    rsx! {
        div { class: "page subjects-page",
            BreadcrumbBar {}
            button {
                class: "btn btn-secondary back-btn",
                r#type: "button",
                onclick: move |_| {
                    let _ = back_ctx.with_services(|services| services.navigate_back(BackTarget::ToExams));
                    let _ = navigator.push(Route::Exams {});
                },
                "← Back to Exams"
            }
            h2 { class: "view-title", "{title}" }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            div { class: "card-grid", {subject_cards} }
        }
    }
}
