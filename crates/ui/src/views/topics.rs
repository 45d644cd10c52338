use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::BackTarget;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{BreadcrumbBar, ViewError};
use crate::vm::{map_topic_cards, topics_title};

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut search = use_signal(String::new);
    let error = use_signal(|| None::<ViewError>);

    let query = search();
    let loaded = ctx.with_services(|services| {
        services.navigator().subject().map(|subject| {
            (
                topics_title(subject),
                map_topic_cards(&services.topics_matching(&query)),
            )
        })
    });
    let (title, cards) = match loaded {
        Ok(Some(data)) => data,
        Ok(None) => {
            return rsx! {
                div { class: "page",
                    p { "Choose a subject first." }
                    Link { to: Route::Subjects {}, "Go to subjects" }
                }
            };
        }
        Err(err) => {
            return rsx! {
                p { "{err.message()}" }
            };
        }
    };

    let topic_cards = cards.iter().map(|card| {
        let ctx = ctx.clone();
        let nav = navigator;
        let mut error = error;
        let name = card.name;
        rsx! {
            div {
                class: "topic-card",
                onclick: move |_| {
                    match ctx.try_with_services(|services| services.start_topic(name).map(|_| ())) {
                        Ok(()) => {
                            error.set(None);
                            let _ = nav.push(Route::Session {});
                        }
                        Err(err) => error.set(Some(err)),
                    }
                },
                h3 { "{card.name}" }
                p { "{card.description}" }
            }
        }
    });

    let back_ctx = ctx.clone();
    rsx! {
        div { class: "page topics-page",
            BreadcrumbBar {}
            button {
                class: "btn btn-secondary back-btn",
                r#type: "button",
                onclick: move |_| {
                    let _ = back_ctx.with_services(|services| services.navigate_back(BackTarget::ToSubjects));
                    let _ = navigator.push(Route::Subjects {});
                },
                "← Back to Subjects"
            }
            h2 { class: "view-title", "{title}" }
            div { class: "topic-search",
                input {
                    class: "topic-search-input",
                    r#type: "text",
                    placeholder: "Search topics...",
                    value: "{search()}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            if cards.is_empty() {
                p { class: "topic-empty", "No topics match that search." }
            } else {
                div { class: "card-grid", {topic_cards} }
            }
        }
    }
}
