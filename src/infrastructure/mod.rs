//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON-file backed trainee and course collections

pub mod repositories;

// Re-export for convenience
pub use repositories::{JsonCourseRepository, JsonTraineeRepository};
