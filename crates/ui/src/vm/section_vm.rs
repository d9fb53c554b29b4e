use workshop_core::SectionProgress;
use workshop_core::model::{Curriculum, Progress, Section, SectionId, Step, StepId};

use super::rich_text::{TrustedHtml, render_inline, render_rich_text};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetVm {
    /// `language-<lang>` class for syntax highlighting hooks.
    pub class: String,
    pub label: &'static str,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub id: StepId,
    pub number: usize,
    pub title: String,
    pub description: TrustedHtml,
    pub snippet: Option<SnippetVm>,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub question: String,
    pub answer: TrustedHtml,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPageVm {
    pub id: SectionId,
    pub number: usize,
    pub count: usize,
    pub title: String,
    pub description: Option<TrustedHtml>,
    pub estimated_time: Option<String>,
    pub prerequisites: Option<TrustedHtml>,
    pub technologies: Vec<String>,
    pub overview: Option<TrustedHtml>,
    pub core_concepts: Vec<TrustedHtml>,
    pub learning_outcomes: Vec<TrustedHtml>,
    pub steps: Vec<StepVm>,
    pub tips: Option<TrustedHtml>,
    pub live_session_notes: Option<TrustedHtml>,
    pub common_questions: Vec<QuestionVm>,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub has_prev: bool,
    pub is_last: bool,
}

/// Maps the section at `index`, or `None` when the index is out of range.
#[must_use]
pub fn map_section_page(
    curriculum: &Curriculum,
    index: usize,
    progress: &Progress,
) -> Option<SectionPageVm> {
    let section = curriculum.section_at(index)?;
    let stats = SectionProgress::of(section, progress);

    Some(SectionPageVm {
        id: section.id().clone(),
        number: index + 1,
        count: curriculum.len(),
        title: section.title().to_owned(),
        description: section.description().map(render_inline),
        estimated_time: section.estimated_time().map(str::to_owned),
        prerequisites: section.prerequisites().map(render_inline),
        technologies: section.technologies().to_vec(),
        overview: section.overview().map(render_rich_text),
        core_concepts: inline_list(section.core_concepts()),
        learning_outcomes: inline_list(section.learning_outcomes()),
        steps: map_steps(section, progress),
        tips: section.tips().map(render_rich_text),
        live_session_notes: section.live_session_notes().map(render_rich_text),
        common_questions: section
            .common_questions()
            .iter()
            .map(|q| QuestionVm {
                question: q.question.clone(),
                answer: render_rich_text(&q.answer),
            })
            .collect(),
        completed: stats.completed(),
        total: stats.total(),
        percent: stats.percent(),
        has_prev: index > 0,
        is_last: curriculum.is_last(index),
    })
}

fn map_steps(section: &Section, progress: &Progress) -> Vec<StepVm> {
    section
        .steps()
        .iter()
        .enumerate()
        .map(|(idx, step)| map_step(idx + 1, step, progress))
        .collect()
}

fn map_step(number: usize, step: &Step, progress: &Progress) -> StepVm {
    StepVm {
        id: step.id().clone(),
        number,
        title: step.title().to_owned(),
        description: render_rich_text(step.description()),
        snippet: step.code_snippet().map(|snippet| SnippetVm {
            class: format!("language-{}", snippet.language()),
            label: snippet.language().as_str(),
            code: snippet.code().trim().to_owned(),
        }),
        completed: progress.is_complete(step.id()),
    }
}

fn inline_list(items: &[String]) -> Vec<TrustedHtml> {
    items.iter().map(|item| render_inline(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use workshop_core::model::{CodeLanguage, CodeSnippet, WorkshopInfo};

    fn curriculum() -> Curriculum {
        Curriculum::new(
            WorkshopInfo::titled("Workshop"),
            vec![
                Section::new(
                    SectionId::new("a"),
                    "Section A",
                    vec![
                        Step::new(StepId::new("a1"), "Install", "Run the installer").with_snippet(
                            CodeSnippet::new(CodeLanguage::Bash, "\nnpm install\n"),
                        ),
                        Step::new(StepId::new("a2"), "Verify", "Check the version"),
                    ],
                )
                .with_core_concepts(vec!["**Routing** basics".to_owned()]),
                Section::new(SectionId::new("b"), "Section B", Vec::new()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn maps_steps_with_completion_and_snippets() {
        let progress: Progress = [(StepId::new("a1"), true)].into_iter().collect();
        let vm = map_section_page(&curriculum(), 0, &progress).unwrap();

        assert_eq!((vm.number, vm.count), (1, 2));
        assert_eq!((vm.completed, vm.total, vm.percent), (1, 2, 50));
        assert!(!vm.has_prev);
        assert!(!vm.is_last);
        assert!(vm.steps[0].completed);
        assert!(!vm.steps[1].completed);

        let snippet = vm.steps[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.class, "language-bash");
        assert_eq!(snippet.code, "npm install");
        assert!(vm.steps[1].snippet.is_none());
        assert_eq!(
            vm.core_concepts[0].as_str(),
            "<strong>Routing</strong> basics"
        );
    }

    #[test]
    fn last_section_without_steps() {
        let vm = map_section_page(&curriculum(), 1, &Progress::new()).unwrap();
        assert!(vm.is_last);
        assert!(vm.has_prev);
        assert_eq!(vm.percent, 0);
        assert!(vm.steps.is_empty());
    }

    #[test]
    fn out_of_range_index_is_none() {
        assert!(map_section_page(&curriculum(), 2, &Progress::new()).is_none());
    }
}
