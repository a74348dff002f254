//! Error types for Roster
//!
//! Uses `thiserror` for library errors. Every message carries the `ERROR:`
//! prefix so the CLI can print it verbatim.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::StorageError;
use crate::domain::value_objects::EntityId;

/// Result type alias for Roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Which collection a lookup failed against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Trainee,
    Course,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Trainee => write!(f, "Trainee"),
            EntityKind::Course => write!(f, "Course"),
        }
    }
}

/// Main error type for Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Malformed or missing input (bad id, empty field, bad date)
    #[error("ERROR: {0}")]
    Validation(String),

    /// Referenced trainee or course does not exist
    #[error("ERROR: {entity} with ID {id} does not exist")]
    NotFound { entity: EntityKind, id: EntityId },

    /// Course already holds the maximum number of participants
    #[error("ERROR: Course {course} is FULL")]
    CapacityExceeded { course: String },

    /// Trainee already enrolled in the maximum number of courses
    #[error("ERROR: Trainee can not join more than {limit} courses")]
    TraineeOverCommitted { limit: usize },

    /// Trainee is already a participant of the course
    #[error("ERROR: {trainee} already joined {course}")]
    DuplicateRelation { trainee: String, course: String },

    /// Trainee is not a participant of the course
    #[error("ERROR: {trainee} is not in {course}")]
    MissingRelation { trainee: String, course: String },

    /// Every id in the namespace is taken
    #[error("ERROR: Could not generate a unique ID")]
    ExhaustedIdSpace,

    /// Unknown top-level command or missing subcommand
    #[error("ERROR: Invalid command")]
    InvalidCommand,

    /// Unknown subcommand for a known command
    #[error("ERROR: Invalid {command} subcommand")]
    InvalidSubcommand { command: String },

    /// Durable store could not be read or written
    #[error("ERROR: {0}")]
    Storage(#[from] StorageError),

    /// Config file could not be read or parsed
    #[error("ERROR: Invalid config {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        RosterError::Validation(message.into())
    }

    pub fn trainee_not_found(id: EntityId) -> Self {
        RosterError::NotFound {
            entity: EntityKind::Trainee,
            id,
        }
    }

    pub fn course_not_found(id: EntityId) -> Self {
        RosterError::NotFound {
            entity: EntityKind::Course,
            id,
        }
    }
}
