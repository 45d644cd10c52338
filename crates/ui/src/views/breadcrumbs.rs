use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::breadcrumb_items;

#[component]
pub fn BreadcrumbBar() -> Element {
    let ctx = use_context::<AppContext>();
    let items = ctx
        .with_services(|services| breadcrumb_items(&services.breadcrumbs()))
        .unwrap_or_default();
    let last = items.len().saturating_sub(1);
    let crumbs = items.into_iter().enumerate().map(|(i, label)| {
        rsx! {
            span { class: "breadcrumb-item", "{label}" }
            if i < last {
                span { class: "breadcrumb-sep", "›" }
            }
        }
    });
    rsx! {
        div { class: "breadcrumbs", {crumbs} }
    }
}
