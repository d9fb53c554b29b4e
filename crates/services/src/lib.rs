#![forbid(unsafe_code)]

pub mod app_services;
pub mod curriculum;
pub mod error;
pub mod progress_store;

pub use app_services::AppServices;
pub use curriculum::{CurriculumSource, bundled_curriculum, load_curriculum};
pub use error::{AppServicesError, CurriculumLoadError};
pub use progress_store::{PROGRESS_KEY, ProgressStore, SubscriptionId};
