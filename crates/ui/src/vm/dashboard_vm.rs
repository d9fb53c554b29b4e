use workshop_core::model::{Curriculum, Progress, SectionId};
use workshop_core::{CourseProgress, SectionProgress};

use super::rich_text::{TrustedHtml, excerpt};

/// One entry of the dashboard's learning path.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionCardVm {
    pub id: SectionId,
    pub number: usize,
    pub title: String,
    pub excerpt: Option<TrustedHtml>,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub is_complete: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub title: String,
    pub description: String,
    pub sections: Vec<SectionCardVm>,
    pub total_steps: usize,
    pub course_complete: bool,
    pub first_section: Option<SectionId>,
}

#[must_use]
pub fn map_dashboard(curriculum: &Curriculum, progress: &Progress) -> DashboardVm {
    let sections = curriculum
        .sections()
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let stats = SectionProgress::of(section, progress);
            SectionCardVm {
                id: section.id().clone(),
                number: idx + 1,
                title: section.title().to_owned(),
                excerpt: section.overview().map(excerpt),
                completed: stats.completed(),
                total: stats.total(),
                percent: stats.percent(),
                is_complete: stats.is_complete(),
            }
        })
        .collect();

    let course = CourseProgress::of(curriculum, progress);
    DashboardVm {
        title: curriculum.info().title.clone(),
        description: curriculum.info().description.clone(),
        sections,
        total_steps: curriculum.total_steps(),
        course_complete: course.is_complete(),
        first_section: curriculum.first().map(|section| section.id().clone()),
    }
}
