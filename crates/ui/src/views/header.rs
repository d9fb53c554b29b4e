use dioxus::prelude::*;
use workshop_core::NavAction;

#[component]
pub fn Header(title: String, on_navigate: EventHandler<NavAction>) -> Element {
    rsx! {
        header { class: "site-header",
            button {
                class: "brand",
                r#type: "button",
                onclick: move |_| on_navigate.call(NavAction::Back),
                "{title}"
            }
            nav {
                button {
                    class: "nav-link",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(NavAction::Back),
                    "Dashboard"
                }
            }
        }
    }
}
