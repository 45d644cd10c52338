use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    AboutView, ExamsView, ProgressView, SessionView, SubjectsView, TopicsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ExamsView)] Exams {},
        #[route("/subjects", SubjectsView)] Subjects {},
        #[route("/topics", TopicsView)] Topics {},
        #[route("/session", SessionView)] Session {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/about", AboutView)] About {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            NavBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    let ctx = use_context::<AppContext>();
    let app_name = ctx.app_name().to_string();
    rsx! {
        nav { class: "navbar",
            h1 { class: "navbar-brand", "{app_name}" }
            ul {
                li { Link { to: Route::Exams {}, "Practice" } }
                li { Link { to: Route::Progress {}, "Progress" } }
                li { Link { to: Route::About {}, "About" } }
            }
        }
    }
}
