//! Roster - trainee and course management
//!
//! Keeps two JSON collections, trainees and courses, and enforces the
//! enrollment rules between them: a course holds at most 20 participants and
//! a trainee joins at most 5 courses.
//!
//! Layers:
//! - `domain` - entities, value objects, enrollment rules, storage ports
//! - `application` - use cases and the `Roster` command dispatcher
//! - `infrastructure` - JSON file repositories
//! - `presentation` - command line decoding, clap CLI, wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Command, Outcome, Roster};
pub use config::Config;
pub use domain::entities::{Course, Trainee, MAX_COURSE_CAPACITY, MAX_TRAINEE_COURSES};
pub use domain::value_objects::{EntityId, StartDate};
pub use error::{EntityKind, RosterError, RosterResult};
pub use presentation::{create_roster, parse_command};
