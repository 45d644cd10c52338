use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_progress;

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = match ctx.with_services(|services| map_progress(services.progress())) {
        Ok(vm) => vm,
        Err(err) => {
            return rsx! {
                p { "{err.message()}" }
            };
        }
    };

    let activity = vm.activity.iter().map(|item| {
        rsx! {
            div { class: "activity-item",
                div {
                    strong { "{item.action}" }
                    br {}
                    small { "{item.detail}" }
                }
                div {
                    small { "{item.date}" }
                }
            }
        }
    });

    rsx! {
        div { class: "page progress-page",
            header { class: "view-header",
                h2 { class: "view-title", "Your Progress" }
            }
            div { class: "stats-grid",
                div { class: "stat-card",
                    span { class: "stat-value", "{vm.attempted}" }
                    span { class: "stat-label", "Questions Attempted" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{vm.accuracy_label}" }
                    span { class: "stat-label", "Accuracy Rate" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{vm.topics_completed}" }
                    span { class: "stat-label", "Topics Completed" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{vm.time_label}" }
                    span { class: "stat-label", "Time Spent" }
                }
            }
            h3 { "Recent Activity" }
            div { class: "activity-log",
                if let Some(message) = vm.empty_message() {
                    p { "{message}" }
                } else {
                    {activity}
                }
            }
        }
    }
}
