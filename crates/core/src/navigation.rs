//! In-memory navigation state machine.
//!
//! Navigation is never persisted: a fresh [`Navigation`] always starts on the
//! dashboard.

use crate::completion::CourseProgress;
use crate::model::{Curriculum, Progress, SectionId};

/// Stored navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Section(SectionId),
    Completed,
}

/// User intents that move between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Select(SectionId),
    Prev,
    Next,
    CompleteCourse,
    Back,
}

/// What should be rendered for the current state.
///
/// Unlike [`Screen`] this is derived on every render and may differ from the
/// stored state (unknown ids, course completion on the last section).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Section { index: usize },
    NotFound(SectionId),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    screen: Screen,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an explicit state instead of the dashboard.
    #[must_use]
    pub fn from_screen(screen: Screen) -> Self {
        Self { screen }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Applies `action` and returns whether the stored state changed.
    ///
    /// Invalid actions (e.g. `Prev` on the dashboard) are no-ops.
    pub fn apply(
        &mut self,
        action: NavAction,
        curriculum: &Curriculum,
        progress: &Progress,
    ) -> bool {
        let next = match action {
            NavAction::Select(id) => Some(Screen::Section(id)),
            NavAction::Back => Some(Screen::Dashboard),
            NavAction::Prev => self
                .current_index(curriculum)
                .filter(|idx| *idx > 0)
                .and_then(|idx| curriculum.section_at(idx - 1))
                .map(|section| Screen::Section(section.id().clone())),
            NavAction::Next => self
                .current_index(curriculum)
                .and_then(|idx| Self::next_screen(idx, curriculum, progress)),
            NavAction::CompleteCourse => self
                .current_index(curriculum)
                .filter(|idx| curriculum.is_last(*idx))
                .map(|_| Screen::Completed),
        };

        match next {
            Some(screen) if screen != self.screen => {
                self.screen = screen;
                true
            }
            _ => false,
        }
    }

    /// Resolves the stored state into the view to render.
    #[must_use]
    pub fn resolve(&self, curriculum: &Curriculum, progress: &Progress) -> View {
        match &self.screen {
            Screen::Dashboard => View::Dashboard,
            Screen::Completed => View::Completed,
            Screen::Section(id) => match curriculum.index_of(id) {
                None => View::NotFound(id.clone()),
                Some(index)
                    if curriculum.is_last(index)
                        && CourseProgress::of(curriculum, progress).is_complete() =>
                {
                    View::Completed
                }
                Some(index) => View::Section { index },
            },
        }
    }

    fn current_index(&self, curriculum: &Curriculum) -> Option<usize> {
        match &self.screen {
            Screen::Section(id) => curriculum.index_of(id),
            Screen::Dashboard | Screen::Completed => None,
        }
    }

    fn next_screen(idx: usize, curriculum: &Curriculum, progress: &Progress) -> Option<Screen> {
        if let Some(section) = curriculum.section_at(idx + 1) {
            return Some(Screen::Section(section.id().clone()));
        }
        // Last section: only leaves once its own steps are all done.
        let section = curriculum.section_at(idx)?;
        section
            .steps()
            .iter()
            .all(|step| progress.is_complete(step.id()))
            .then_some(Screen::Completed)
    }
}
