use dioxus::prelude::*;
use workshop_core::NavAction;

use crate::vm::CompletionVm;

#[component]
pub fn CompletedView(vm: CompletionVm, on_navigate: EventHandler<NavAction>) -> Element {
    let href = format!("/{}", vm.archive_path.trim_start_matches('/'));

    rsx! {
        div { class: "page completed",
            h1 { "Congratulations!" }
            p { class: "lead", "You have finished {vm.title}." }

            div { class: "stats",
                div { class: "stat",
                    strong { "{vm.section_count}" }
                    span { "Sections" }
                }
                div { class: "stat",
                    strong { "{vm.completed_steps} / {vm.total_steps}" }
                    span { "Steps completed" }
                }
                div { class: "stat",
                    strong { "{vm.percent}%" }
                    span { "Progress" }
                }
            }

            if !vm.technologies.is_empty() {
                section {
                    h2 { "Technologies Covered" }
                    ul { class: "tags",
                        for tech in vm.technologies.iter() {
                            li { key: "{tech}", "{tech}" }
                        }
                    }
                }
            }
            if !vm.learning_outcomes.is_empty() {
                section {
                    h2 { "What You Learned" }
                    ul {
                        for (idx, outcome) in vm.learning_outcomes.iter().enumerate() {
                            li { key: "{idx}", "{outcome}" }
                        }
                    }
                }
            }

            div { class: "actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(NavAction::Back),
                    "Review Course"
                }
                a { class: "btn primary", href: "{href}", download: "{vm.archive_path}",
                    "Download Workshop Code"
                }
            }
        }
    }
}
