use workshop_core::CourseProgress;
use workshop_core::model::{Curriculum, Progress};

/// Data for the course completion screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub title: String,
    pub section_count: usize,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub percent: u8,
    pub technologies: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub archive_path: String,
}

#[must_use]
pub fn map_completion(curriculum: &Curriculum, progress: &Progress) -> CompletionVm {
    let info = curriculum.info();
    let course = CourseProgress::of(curriculum, progress);
    CompletionVm {
        title: info.title.clone(),
        section_count: curriculum.len(),
        completed_steps: course.completed(),
        total_steps: course.total(),
        percent: course.percent(),
        technologies: info.technologies.clone(),
        learning_outcomes: info.learning_outcomes.clone(),
        archive_path: info.archive_path.clone(),
    }
}
