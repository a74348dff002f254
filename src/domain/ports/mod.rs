//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod collection_repository;

pub use collection_repository::{
    CourseRepository, StorageError, StorageResult, TraineeRepository,
};
