//! Course Use Case
//!
//! Create, fetch, list, reschedule and delete courses, and move trainees on
//! and off course rosters.

mod result;
mod use_case;

pub use result::Enrollment;
pub use use_case::CourseUseCase;
