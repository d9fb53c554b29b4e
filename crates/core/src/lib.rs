#![forbid(unsafe_code)]

pub mod completion;
pub mod model;
pub mod navigation;

pub use completion::{CourseProgress, SectionProgress};
pub use navigation::{NavAction, Navigation, Screen, View};
