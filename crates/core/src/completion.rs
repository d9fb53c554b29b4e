//! Completion math over a curriculum and a progress map.

use crate::model::{Curriculum, Progress, Section};

/// Completed/total step counts for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionProgress {
    completed: usize,
    total: usize,
}

impl SectionProgress {
    #[must_use]
    pub fn of(section: &Section, progress: &Progress) -> Self {
        let completed = section
            .steps()
            .iter()
            .filter(|step| progress.is_complete(step.id()))
            .count();
        Self {
            completed,
            total: section.steps().len(),
        }
    }

    #[must_use]
    pub fn completed(self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    /// Fraction in `[0, 1]`; `0.0` for a section without steps.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    /// Rounded percentage as displayed next to progress bars.
    #[must_use]
    pub fn percent(self) -> u8 {
        percent_of(self.completed, self.total)
    }

    /// Every step done. A section without steps is never complete.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Completed/total counts over the distinct step ids of a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseProgress {
    completed: usize,
    total: usize,
}

impl CourseProgress {
    #[must_use]
    pub fn of(curriculum: &Curriculum, progress: &Progress) -> Self {
        let ids = curriculum.distinct_step_ids();
        let completed = ids.iter().filter(|id| progress.is_complete(id)).count();
        Self {
            completed,
            total: ids.len(),
        }
    }

    #[must_use]
    pub fn completed(self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        percent_of(self.completed, self.total)
    }

    /// All steps done; an empty curriculum is never complete.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

fn percent_of(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
