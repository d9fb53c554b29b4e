use dioxus::prelude::*;
use workshop_core::NavAction;

use crate::vm::{DashboardVm, SectionCardVm};

use super::ProgressBar;

#[component]
pub fn DashboardView(vm: DashboardVm, on_navigate: EventHandler<NavAction>) -> Element {
    let start = vm.first_section.clone();

    rsx! {
        div { class: "page dashboard",
            section { class: "hero",
                h1 { "{vm.title}" }
                if !vm.description.is_empty() {
                    p { class: "lead", "{vm.description}" }
                }
                if let Some(first) = start {
                    button {
                        class: "btn primary",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(NavAction::Select(first.clone())),
                        "Start Workshop"
                    }
                }
            }

            if vm.course_complete {
                div { class: "banner success",
                    h2 { "Course Completed!" }
                    p { "All {vm.total_steps} steps are checked off." }
                }
            }

            h2 { "Learning Path" }
            div { class: "section-grid",
                for card in vm.sections.iter().cloned() {
                    SectionCard { key: "{card.id}", card: card.clone(), on_navigate }
                }
            }
        }
    }
}

#[component]
fn SectionCard(card: SectionCardVm, on_navigate: EventHandler<NavAction>) -> Element {
    let id = card.id.clone();
    let class = if card.is_complete {
        "section-card complete"
    } else {
        "section-card"
    };

    rsx! {
        article { class,
            span { class: "section-number", "Section {card.number}" }
            h3 { "{card.title}" }
            if let Some(excerpt) = &card.excerpt {
                p { class: "excerpt", dangerous_inner_html: "{excerpt.as_str()}" }
            }
            ProgressBar { percent: card.percent }
            p { class: "progress-label",
                "{card.completed} of {card.total} steps completed"
            }
            span { class: "percent", "{card.percent}%" }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| on_navigate.call(NavAction::Select(id.clone())),
                "Start Section"
            }
        }
    }
}
