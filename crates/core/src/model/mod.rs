mod curriculum;
mod ids;
mod progress;
mod section;

pub use curriculum::{Curriculum, CurriculumDocument, CurriculumError, WorkshopInfo};
pub use ids::{ParseIdError, SectionId, StepId};
pub use progress::Progress;
pub use section::{CodeLanguage, CodeSnippet, CommonQuestion, Section, Step};
