//! Loading of the read-only curriculum content.

use std::path::PathBuf;

use tracing::{info, warn};
use workshop_core::model::{Curriculum, CurriculumDocument};

use crate::error::CurriculumLoadError;

const BUNDLED_CURRICULUM: &str = include_str!("../content/curriculum.json");

/// Where curriculum content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurriculumSource {
    /// The curriculum compiled into the binary.
    #[default]
    Bundled,
    /// A JSON document on disk with the same shape as the bundled one.
    File(PathBuf),
}

/// Load and validate curriculum content.
///
/// Duplicate step ids are logged, not rejected: completion for such a step is
/// shared by every section that lists it.
///
/// # Errors
///
/// Returns `CurriculumLoadError` if the file cannot be read, is not a valid
/// curriculum document, or fails validation.
pub fn load_curriculum(source: &CurriculumSource) -> Result<Curriculum, CurriculumLoadError> {
    let curriculum = match source {
        CurriculumSource::Bundled => parse_curriculum(BUNDLED_CURRICULUM)?,
        CurriculumSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CurriculumLoadError::Io {
                path: path.clone(),
                source,
            })?;
            parse_curriculum(&raw)?
        }
    };

    let duplicates = curriculum.duplicate_step_ids();
    if !duplicates.is_empty() {
        let ids: Vec<&str> = duplicates.iter().map(|id| id.as_str()).collect();
        warn!(ids = ?ids, "curriculum contains duplicate step ids");
    }
    info!(
        sections = curriculum.len(),
        steps = curriculum.total_steps(),
        "curriculum loaded"
    );
    Ok(curriculum)
}

/// The curriculum compiled into the binary.
///
/// # Errors
///
/// Returns `CurriculumLoadError` if the bundled document is invalid.
pub fn bundled_curriculum() -> Result<Curriculum, CurriculumLoadError> {
    load_curriculum(&CurriculumSource::Bundled)
}

fn parse_curriculum(raw: &str) -> Result<Curriculum, CurriculumLoadError> {
    let document: CurriculumDocument = serde_json::from_str(raw)?;
    Ok(Curriculum::from_document(document)?)
}
