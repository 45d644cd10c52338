mod about;
mod breadcrumbs;
mod exams;
mod progress;
mod session;
mod state;
mod subjects;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use breadcrumbs::BreadcrumbBar;
pub use exams::ExamsView;
pub use progress::ProgressView;
pub use session::SessionView;
pub use state::ViewError;
pub use subjects::SubjectsView;
pub use topics::TopicsView;
