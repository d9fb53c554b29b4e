use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, PROGRESS_KEY};
use storage::repository::{InMemoryRepository, KeyValueRepository, Storage};
use workshop_core::model::{Curriculum, Section, SectionId, Step, StepId, WorkshopInfo};
use workshop_core::{NavAction, Navigation, Screen};

use crate::app::{Shell, ShellTestHandles};
use crate::context::{UiApp, build_app_context};

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<AppServices>,
    initial: Navigation,
    handles: ShellTestHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ShellHarnessProps {}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Shell { initial: props.initial.clone() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    handles: ShellTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Dispatches a navigation intent through the shell and re-renders.
    pub fn navigate(&mut self, action: NavAction) {
        let navigate = self.handles.navigate();
        self.dom.in_runtime(|| navigate.call(action));
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    /// Clicks a step checkbox and lets the spawned write-through finish.
    pub async fn toggle(&mut self, step_id: &str) {
        let toggle = self.handles.toggle();
        let step_id = StepId::new(step_id);
        self.dom.in_runtime(|| toggle.call(step_id));
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub async fn persisted(&self) -> Option<String> {
        self.repo.get(PROGRESS_KEY).await.expect("in-memory read")
    }
}

/// Two sections, one step each: `a`/`a1` and `b`/`b1`.
pub fn two_section_curriculum() -> Curriculum {
    let mut info = WorkshopInfo::titled("Test Workshop");
    info.technologies = vec!["Rust".to_owned()];
    Curriculum::new(
        info,
        vec![
            Section::new(
                SectionId::new("a"),
                "Section A",
                vec![Step::new(StepId::new("a1"), "First step", "Do the <em>first</em> thing")],
            )
            .with_overview("Intro to **A**"),
            Section::new(
                SectionId::new("b"),
                "Section B",
                vec![Step::new(StepId::new("b1"), "Second step", "Do the second thing")],
            ),
        ],
    )
    .expect("valid curriculum")
}

/// Mounts the shell on `screen` over storage seeded with `persisted` progress JSON.
pub async fn setup_view_harness(screen: Screen, persisted: Option<&str>) -> ViewHarness {
    let repo = match persisted {
        Some(raw) => InMemoryRepository::new().with_entry(PROGRESS_KEY, raw),
        None => InMemoryRepository::new(),
    };
    let storage = Storage {
        kv: Arc::new(repo.clone()),
    };
    let handles = ShellTestHandles::default();
    let app = Arc::new(AppServices::from_parts(two_section_curriculum(), &storage).await);

    let dom = VirtualDom::new_with_props(
        ShellHarness,
        ShellHarnessProps {
            app,
            initial: Navigation::from_screen(screen),
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, repo, handles }
}
