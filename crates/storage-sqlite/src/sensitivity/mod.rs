//! SQLite storage implementation for sensitivity samples and alert settings.

mod model;
mod repository;

pub use model::{NewSensitivitySampleDB, SensitivitySampleDB, SensitivitySettingsDB};
pub use repository::SensitivityRepository;
