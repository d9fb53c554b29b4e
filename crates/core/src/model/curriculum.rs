use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

use crate::model::ids::{SectionId, StepId};
use crate::model::section::Section;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("workshop title cannot be empty")]
    EmptyTitle,

    #[error("section at position {position} has a blank id")]
    BlankSectionId { position: usize },

    #[error("section {section} contains a step with a blank id")]
    BlankStepId { section: SectionId },

    #[error("section id {0} is used more than once")]
    DuplicateSection(SectionId),
}

//
// ─── WORKSHOP METADATA ─────────────────────────────────────────────────────────
//

fn default_archive_path() -> String {
    "workshop-code.zip".to_owned()
}

/// Workshop-wide metadata shown on the dashboard and completion screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    /// Static download link for the workshop code archive.
    #[serde(default = "default_archive_path")]
    pub archive_path: String,
}

impl WorkshopInfo {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            version: String::new(),
            technologies: Vec::new(),
            prerequisites: Vec::new(),
            learning_outcomes: Vec::new(),
            archive_path: default_archive_path(),
        }
    }
}

/// Serialized shape of a curriculum file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumDocument {
    pub workshop: WorkshopInfo,
    #[serde(default)]
    pub sections: Vec<Section>,
}

//
// ─── CURRICULUM ────────────────────────────────────────────────────────────────
//

/// Ordered, read-only list of sections. Order is the navigation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    info: WorkshopInfo,
    sections: Vec<Section>,
    positions: HashMap<SectionId, usize>,
}

impl Curriculum {
    /// Validates and builds a curriculum.
    ///
    /// Duplicate step ids are tolerated; see [`Curriculum::duplicate_step_ids`].
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError` for blank ids, a blank title, or repeated section ids.
    pub fn new(info: WorkshopInfo, sections: Vec<Section>) -> Result<Self, CurriculumError> {
        if info.title.trim().is_empty() {
            return Err(CurriculumError::EmptyTitle);
        }

        let mut positions = HashMap::with_capacity(sections.len());
        for (position, section) in sections.iter().enumerate() {
            if section.id().as_str().trim().is_empty() {
                return Err(CurriculumError::BlankSectionId { position });
            }
            if section
                .steps()
                .iter()
                .any(|step| step.id().as_str().trim().is_empty())
            {
                return Err(CurriculumError::BlankStepId {
                    section: section.id().clone(),
                });
            }
            if positions.insert(section.id().clone(), position).is_some() {
                return Err(CurriculumError::DuplicateSection(section.id().clone()));
            }
        }

        Ok(Self {
            info,
            sections,
            positions,
        })
    }

    /// # Errors
    ///
    /// See [`Curriculum::new`].
    pub fn from_document(document: CurriculumDocument) -> Result<Self, CurriculumError> {
        Self::new(document.workshop, document.sections)
    }

    #[must_use]
    pub fn info(&self) -> &WorkshopInfo {
        &self.info
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.index_of(id).map(|idx| &self.sections[idx])
    }

    #[must_use]
    pub fn section_at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.sections.len()
    }

    /// Every step id in curriculum order, duplicates included.
    pub fn step_ids(&self) -> impl Iterator<Item = &StepId> {
        self.sections
            .iter()
            .flat_map(|section| section.steps().iter().map(|step| step.id()))
    }

    /// Number of step entries, duplicates included.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.sections.iter().map(|section| section.steps().len()).sum()
    }

    #[must_use]
    pub fn distinct_step_ids(&self) -> BTreeSet<&StepId> {
        self.step_ids().collect()
    }

    /// Step ids that appear more than once, each reported once, sorted.
    #[must_use]
    pub fn duplicate_step_ids(&self) -> Vec<&StepId> {
        let mut seen = HashSet::new();
        let duplicates: BTreeSet<&StepId> =
            self.step_ids().filter(|id| !seen.insert(*id)).collect();
        duplicates.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::section::Step;

    fn step(id: &str) -> Step {
        Step::new(StepId::new(id), id, "")
    }

    fn section(id: &str, steps: &[&str]) -> Section {
        Section::new(
            SectionId::new(id),
            id.to_uppercase(),
            steps.iter().map(|s| step(s)).collect(),
        )
    }

    #[test]
    fn indexes_sections_in_order() {
        let curriculum = Curriculum::new(
            WorkshopInfo::titled("Workshop"),
            vec![section("a", &["a1"]), section("b", &["b1", "b2"])],
        )
        .unwrap();

        assert_eq!(curriculum.len(), 2);
        assert_eq!(curriculum.index_of(&SectionId::new("b")), Some(1));
        assert!(curriculum.is_last(1));
        assert!(!curriculum.is_last(0));
        assert_eq!(curriculum.total_steps(), 3);
        assert!(curriculum.section(&SectionId::new("missing")).is_none());
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let err = Curriculum::new(
            WorkshopInfo::titled("Workshop"),
            vec![section("a", &["a1"]), section("a", &["a2"])],
        )
        .unwrap_err();
        assert_eq!(err, CurriculumError::DuplicateSection(SectionId::new("a")));
    }

    #[test]
    fn rejects_blank_ids_and_titles() {
        assert_eq!(
            Curriculum::new(WorkshopInfo::titled(" "), Vec::new()).unwrap_err(),
            CurriculumError::EmptyTitle
        );
        assert_eq!(
            Curriculum::new(WorkshopInfo::titled("W"), vec![section("", &[])]).unwrap_err(),
            CurriculumError::BlankSectionId { position: 0 }
        );
        assert!(matches!(
            Curriculum::new(WorkshopInfo::titled("W"), vec![section("a", &[" "])]),
            Err(CurriculumError::BlankStepId { .. })
        ));
    }

    #[test]
    fn reports_duplicate_step_ids_without_rejecting() {
        let curriculum = Curriculum::new(
            WorkshopInfo::titled("Workshop"),
            vec![
                section("a", &["x-1", "x-2", "x-1"]),
                section("b", &["x-2", "b-1"]),
            ],
        )
        .unwrap();

        let dups: Vec<&str> = curriculum
            .duplicate_step_ids()
            .into_iter()
            .map(StepId::as_str)
            .collect();
        assert_eq!(dups, vec!["x-1", "x-2"]);
        assert_eq!(curriculum.total_steps(), 5);
        assert_eq!(curriculum.distinct_step_ids().len(), 3);
    }

    #[test]
    fn document_defaults_archive_path() {
        let json = r#"{ "workshop": { "title": "Guide" }, "sections": [] }"#;
        let document: CurriculumDocument = serde_json::from_str(json).unwrap();
        let curriculum = Curriculum::from_document(document).unwrap();
        assert_eq!(curriculum.info().archive_path, "workshop-code.zip");
        assert!(curriculum.is_empty());
    }
}
