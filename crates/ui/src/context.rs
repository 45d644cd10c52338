use std::sync::{Arc, Mutex};

use services::{AppServices, AppServicesError};

use crate::views::ViewError;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn services(&self) -> Arc<Mutex<AppServices>>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    services: Arc<Mutex<AppServices>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            services: app.services(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Run `f` against the shared services.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if a previous holder panicked with the lock.
    pub fn with_services<R>(&self, f: impl FnOnce(&mut AppServices) -> R) -> Result<R, ViewError> {
        let mut services = self.services.lock().map_err(|_| ViewError::Unknown)?;
        Ok(f(&mut services))
    }

    /// Like [`AppContext::with_services`] for fallible service calls.
    ///
    /// # Errors
    ///
    /// Returns the service error mapped to a `ViewError`.
    pub fn try_with_services<R>(
        &self,
        f: impl FnOnce(&mut AppServices) -> Result<R, AppServicesError>,
    ) -> Result<R, ViewError> {
        self.with_services(f)?.map_err(ViewError::from)
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.services, &other.services)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
