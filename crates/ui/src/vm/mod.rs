mod completion_vm;
mod dashboard_vm;
mod rich_text;
mod section_vm;

pub use completion_vm::{CompletionVm, map_completion};
pub use dashboard_vm::{DashboardVm, SectionCardVm, map_dashboard};
pub use rich_text::{TrustedHtml, excerpt, render_inline, render_rich_text};
pub use section_vm::{QuestionVm, SectionPageVm, SnippetVm, StepVm, map_section_page};
