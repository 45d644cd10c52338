use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page about-page",
            h2 { class: "view-title", "About" }
            p {
                "Practice multiple-choice questions for the Geological Survey of India (GSI) "
                "and GATE Geology & Geophysics examinations, organised by subject and topic."
            }
            h3 { "How it works" }
            ul {
                li { "Pick an exam, a subject and a topic to start a practice session." }
                li { "Each answer shows an explanation; wrong answers add key points." }
                li { "Progress is kept for this run of the app only." }
            }
        }
    }
}
