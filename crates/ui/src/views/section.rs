use dioxus::prelude::*;
use workshop_core::NavAction;
use workshop_core::model::StepId;

use crate::vm::{SectionPageVm, TrustedHtml};

use super::ProgressBar;
use super::step::StepCard;

#[component]
pub fn SectionView(
    vm: SectionPageVm,
    on_navigate: EventHandler<NavAction>,
    on_toggle: EventHandler<StepId>,
) -> Element {
    rsx! {
        div { class: "page section-page",
            div { class: "section-meta",
                span { class: "section-number", "Section {vm.number}" }
                span { class: "position", "{vm.number} of {vm.count}" }
                if let Some(time) = &vm.estimated_time {
                    span { class: "estimated-time", "{time}" }
                }
            }
            h1 { "{vm.title}" }
            if let Some(description) = &vm.description {
                p { class: "lead", dangerous_inner_html: "{description.as_str()}" }
            }

            div { class: "section-progress",
                ProgressBar { percent: vm.percent }
                p { class: "progress-label",
                    "{vm.completed} of {vm.total} steps completed"
                }
            }

            if !vm.technologies.is_empty() {
                ul { class: "tags",
                    for tech in vm.technologies.iter() {
                        li { key: "{tech}", "{tech}" }
                    }
                }
            }
            if let Some(prerequisites) = &vm.prerequisites {
                RichBlock { title: "Prerequisites", html: prerequisites.clone() }
            }
            if let Some(overview) = &vm.overview {
                RichBlock { title: "Overview", html: overview.clone() }
            }
            RichList { title: "Core Concepts", items: vm.core_concepts.clone() }
            RichList { title: "What You Will Learn", items: vm.learning_outcomes.clone() }

            if !vm.steps.is_empty() {
                section { class: "steps",
                    h2 { "Steps" }
                    ol {
                        for step in vm.steps.iter() {
                            StepCard { key: "{step.id}", step: step.clone(), on_toggle }
                        }
                    }
                }
            }

            if let Some(tips) = &vm.tips {
                RichBlock { title: "Tips", html: tips.clone() }
            }
            if let Some(notes) = &vm.live_session_notes {
                RichBlock { title: "Live Session Notes", html: notes.clone() }
            }
            if !vm.common_questions.is_empty() {
                section { class: "questions",
                    h2 { "Common Questions" }
                    for (idx, q) in vm.common_questions.iter().enumerate() {
                        details { key: "{idx}",
                            summary { "{q.question}" }
                            div { class: "rich-text", dangerous_inner_html: "{q.answer.as_str()}" }
                        }
                    }
                }
            }

            SectionFooter { has_prev: vm.has_prev, is_last: vm.is_last, on_navigate }
        }
    }
}

#[component]
fn SectionFooter(has_prev: bool, is_last: bool, on_navigate: EventHandler<NavAction>) -> Element {
    rsx! {
        footer { class: "section-nav",
            button {
                class: "btn",
                r#type: "button",
                disabled: !has_prev,
                onclick: move |_| on_navigate.call(NavAction::Prev),
                "Previous"
            }
            button {
                class: "btn ghost",
                r#type: "button",
                onclick: move |_| on_navigate.call(NavAction::Back),
                "Back to Dashboard"
            }
            if is_last {
                button {
                    class: "btn primary",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(NavAction::CompleteCourse),
                    "Complete Course"
                }
            } else {
                button {
                    class: "btn primary",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(NavAction::Next),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn RichBlock(title: String, html: TrustedHtml) -> Element {
    rsx! {
        section { class: "rich-block",
            h2 { "{title}" }
            div { class: "rich-text", dangerous_inner_html: "{html.as_str()}" }
        }
    }
}

#[component]
fn RichList(title: String, items: Vec<TrustedHtml>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        section { class: "rich-block",
            h2 { "{title}" }
            ul {
                for (idx, item) in items.iter().enumerate() {
                    li { key: "{idx}", dangerous_inner_html: "{item.as_str()}" }
                }
            }
        }
    }
}
