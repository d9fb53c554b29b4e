use dioxus::prelude::*;
use workshop_core::model::StepId;

use crate::vm::StepVm;

#[component]
pub fn StepCard(step: StepVm, on_toggle: EventHandler<StepId>) -> Element {
    let id = step.id.clone();
    let class = if step.completed { "step done" } else { "step" };
    let checkbox_id = format!("step-{}", step.id);

    rsx! {
        li { class,
            div { class: "step-header",
                input {
                    id: "{checkbox_id}",
                    r#type: "checkbox",
                    checked: step.completed,
                    onchange: move |_| on_toggle.call(id.clone()),
                }
                label { r#for: "{checkbox_id}",
                    span { class: "step-number", "Step {step.number}" }
                    h4 { "{step.title}" }
                }
            }
            div {
                class: "step-body rich-text",
                dangerous_inner_html: "{step.description.as_str()}",
            }
            if let Some(snippet) = &step.snippet {
                div { class: "code-block",
                    span { class: "code-label", "{snippet.label}" }
                    pre {
                        code { class: "{snippet.class}", "{snippet.code}" }
                    }
                }
            }
        }
    }
}
