mod completed;
mod dashboard;
mod header;
mod not_found;
mod section;
mod step;

pub use completed::CompletedView;
pub use dashboard::DashboardView;
pub use header::Header;
pub use not_found::NotFoundView;
pub use section::SectionView;
pub use step::StepCard;

use dioxus::prelude::*;

#[component]
pub fn ProgressBar(percent: u8) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-fill", style: "width: {percent}%" }
        }
    }
}

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
