//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod course;
mod json_file;
mod trainee;

pub use course::JsonCourseRepository;
pub use trainee::JsonTraineeRepository;
