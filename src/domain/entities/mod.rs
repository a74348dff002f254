//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Trainee` - A person that can be enrolled in courses
//! - `Course` - An offering with a capacity-bounded roster

mod course;
mod trainee;

pub use course::{Course, MAX_COURSE_CAPACITY, MAX_TRAINEE_COURSES};
pub use trainee::Trainee;
