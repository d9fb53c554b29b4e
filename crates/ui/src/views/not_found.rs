use dioxus::prelude::*;
use workshop_core::NavAction;

#[component]
pub fn NotFoundView(on_navigate: EventHandler<NavAction>) -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "Section Not Found" }
            p { "The requested section does not exist." }
            button {
                class: "btn primary",
                r#type: "button",
                onclick: move |_| on_navigate.call(NavAction::Back),
                "Back to Dashboard"
            }
        }
    }
}
