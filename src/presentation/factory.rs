//! Roster Factory
//!
//! Wires the JSON repositories into a `Roster`.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::Roster;
use crate::config::Config;
use crate::infrastructure::{JsonCourseRepository, JsonTraineeRepository};

/// Create a roster backed by the JSON files named in `config`.
pub fn create_roster(config: &Config) -> Roster {
    let trainees = JsonTraineeRepository::with_path(config.trainees_path());
    let courses = JsonCourseRepository::with_path(config.courses_path());

    tracing::debug!(
        trainees = %trainees.path().display(),
        courses = %courses.path().display(),
        "opening roster stores"
    );

    Roster::new(Arc::new(trainees), Arc::new(courses))
}
