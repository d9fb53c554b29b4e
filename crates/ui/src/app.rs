#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::debug;
use workshop_core::model::StepId;
use workshop_core::{NavAction, Navigation, View};

use crate::context::AppContext;
use crate::views::{CompletedView, DashboardView, Header, NotFoundView, SectionView};
use crate::vm::{map_completion, map_dashboard, map_section_page};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.curriculum().info().title.clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell { initial: Navigation::new() }
            }
        }
    }
}

/// Owns navigation and the rendered copy of progress.
///
/// The progress store stays authoritative; the signal mirrors it so toggles
/// re-render without waiting on storage.
#[component]
pub fn Shell(initial: Navigation) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let store = ctx.progress_store();

    let mut navigation = use_signal(move || initial);
    let mut progress = use_signal({
        let store = Arc::clone(&store);
        move || store.snapshot()
    });

    let on_navigate = use_callback({
        let curriculum = Arc::clone(&curriculum);
        move |action: NavAction| {
            let changed = navigation
                .write()
                .apply(action, &curriculum, &progress.read());
            if changed {
                debug!(screen = ?navigation.read().screen(), "navigated");
                let _ = eval("window.scrollTo(0, 0);");
            }
        }
    });

    let on_toggle = use_callback(move |step_id: StepId| {
        progress.write().toggle(&step_id);
        let store = Arc::clone(&store);
        spawn(async move {
            store.toggle(&step_id).await;
            // latest state, not this toggle's copy
            progress.set(store.snapshot());
        });
    });

    #[cfg(test)]
    {
        use_hook(|| {
            if let Some(handles) = try_consume_context::<ShellTestHandles>() {
                handles.register(on_navigate, on_toggle);
            }
        });
    }

    let current = progress.read().clone();
    let view = navigation.read().resolve(&curriculum, &current);
    let body = match view {
        View::Dashboard => rsx! {
            DashboardView { vm: map_dashboard(&curriculum, &current), on_navigate }
        },
        View::Section { index } => match map_section_page(&curriculum, index, &current) {
            Some(vm) => rsx! { SectionView { vm, on_navigate, on_toggle } },
            None => rsx! { NotFoundView { on_navigate } },
        },
        View::NotFound(_) => rsx! { NotFoundView { on_navigate } },
        View::Completed => rsx! {
            CompletedView { vm: map_completion(&curriculum, &current), on_navigate }
        },
    };

    rsx! {
        Header { title: curriculum.info().title.clone(), on_navigate }
        main { class: "content", {body} }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    navigate: Rc<RefCell<Option<Callback<NavAction>>>>,
    toggle: Rc<RefCell<Option<Callback<StepId>>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    fn register(&self, navigate: Callback<NavAction>, toggle: Callback<StepId>) {
        *self.navigate.borrow_mut() = Some(navigate);
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn navigate(&self) -> Callback<NavAction> {
        (*self.navigate.borrow()).expect("shell navigate registered")
    }

    pub(crate) fn toggle(&self) -> Callback<StepId> {
        (*self.toggle.borrow()).expect("shell toggle registered")
    }
}
