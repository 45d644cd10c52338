use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{BreadcrumbBar, ViewError};
use crate::vm::map_exam_cards;

#[component]
pub fn ExamsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let error = use_signal(|| None::<ViewError>);

    let cards = match ctx.with_services(|services| map_exam_cards(services.catalog())) {
        Ok(cards) => cards,
        Err(err) => {
            return rsx! {
                p { "{err.message()}" }
            };
        }
    };

    let exam_cards = cards.into_iter().map(|card| {
        let ctx = ctx.clone();
        let nav = navigator;
        let mut error = error;
        let exam = card.exam;
        rsx! {
            div { class: "exam-card",
                h3 { class: "exam-code", "{card.code}" }
                p { class: "exam-name", "{card.full_name}" }
                p { class: "exam-meta", "{card.subject_count_label}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        match ctx.with_services(|services| services.select_exam(exam)) {
                            Ok(()) => {
                                error.set(None);
                                let _ = nav.push(Route::Subjects {});
                            }
                            Err(err) => error.set(Some(err)),
                        }
                    },
                    "Start Preparation"
                }
            }
        }
    });

    rsx! {
        div { class: "page exams-page",
            BreadcrumbBar {}
            header { class: "view-header",
                h2 { class: "view-title", "Choose Your Exam" }
                p { class: "view-subtitle", "Topic-wise practice for geoscience recruitment exams." }
            }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            div { class: "card-grid", {exam_cards} }
        }
    }
}
