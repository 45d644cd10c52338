use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::rng::ScriptedRandom;
use quiz_core::time::fixed_now;
use services::{AppServices, Clock};

use crate::context::{UiApp, build_app_context};
use crate::views::{ExamsView, ProgressView, SessionView, SubjectsView, TopicsView};

struct TestApp {
    services: Arc<Mutex<AppServices>>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Exam Prep (test)"
    }

    fn services(&self) -> Arc<Mutex<AppServices>> {
        Arc::clone(&self.services)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Exams,
    Subjects,
    Topics,
    Session,
    Progress,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Exams => rsx! { ExamsView {} },
        ViewKind::Subjects => rsx! { SubjectsView {} },
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Session => rsx! { SessionView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<Mutex<AppServices>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Mutate the shared services before rendering.
    pub fn with_services<R>(&self, f: impl FnOnce(&mut AppServices) -> R) -> R {
        let mut services = self.services.lock().expect("services lock");
        f(&mut services)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Services with a fixed clock, three-question sessions and a scripted first pick.
pub fn test_services() -> AppServices {
    AppServices::new(Clock::fixed(fixed_now()))
        .with_question_count(3)
        .with_random(Box::new(ScriptedRandom::new([0])))
}

pub fn setup_view_harness(view: ViewKind, prepare: impl FnOnce(&mut AppServices)) -> ViewHarness {
    let mut services = test_services();
    prepare(&mut services);
    let services = Arc::new(Mutex::new(services));

    let app = Arc::new(TestApp {
        services: Arc::clone(&services),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}
