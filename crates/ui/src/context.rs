use std::sync::Arc;

use services::{AppServices, ProgressStore};
use workshop_core::model::Curriculum;

pub trait UiApp: Send + Sync {
    fn curriculum(&self) -> Arc<Curriculum>;
    fn progress_store(&self) -> Arc<ProgressStore>;
}

impl UiApp for AppServices {
    fn curriculum(&self) -> Arc<Curriculum> {
        AppServices::curriculum(self)
    }

    fn progress_store(&self) -> Arc<ProgressStore> {
        self.progress()
    }
}

#[derive(Clone)]
pub struct AppContext {
    curriculum: Arc<Curriculum>,
    progress_store: Arc<ProgressStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            curriculum: app.curriculum(),
            progress_store: app.progress_store(),
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress_store)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
