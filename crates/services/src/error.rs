//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use storage::sqlite::SqliteInitError;
use workshop_core::model::CurriculumError;

/// Errors emitted while loading curriculum content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CurriculumLoadError {
    #[error("cannot read curriculum file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed curriculum document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CurriculumError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumLoadError),
}
