use std::sync::Arc;

use storage::repository::Storage;
use workshop_core::model::Curriculum;

use crate::curriculum::{CurriculumSource, load_curriculum};
use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;

/// Assembles the curriculum and the progress store for the app.
#[derive(Clone)]
pub struct AppServices {
    curriculum: Arc<Curriculum>,
    progress: Arc<ProgressStore>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// Persisted progress is loaded before this returns.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or curriculum loading fails.
    pub async fn new_sqlite(
        db_url: &str,
        source: &CurriculumSource,
    ) -> Result<Self, AppServicesError> {
        let curriculum = load_curriculum(source)?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(curriculum, &storage).await)
    }

    /// Build services over an already constructed storage.
    pub async fn from_parts(curriculum: Curriculum, storage: &Storage) -> Self {
        let progress = ProgressStore::open(Arc::clone(&storage.kv)).await;
        Self {
            curriculum: Arc::new(curriculum),
            progress: Arc::new(progress),
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }
}
