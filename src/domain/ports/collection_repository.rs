//! Collection repository ports
//!
//! Each collection is loaded as a whole, mutated in memory and saved back as
//! a whole. A store that does not exist yet, or whose content cannot be
//! parsed, loads as an empty collection rather than an error.

use crate::domain::entities::{Course, Trainee};

pub type StorageResult<T> = Result<T, StorageError>;

pub trait TraineeRepository: Send + Sync {
    fn load(&self) -> StorageResult<Vec<Trainee>>;
    /// Fully overwrites the stored collection.
    fn save(&self, trainees: &[Trainee]) -> StorageResult<()>;
}

pub trait CourseRepository: Send + Sync {
    fn load(&self) -> StorageResult<Vec<Course>>;
    /// Fully overwrites the stored collection.
    fn save(&self, courses: &[Course]) -> StorageResult<()>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to access store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize store: {message}")]
    SerializationError { message: String },
}
