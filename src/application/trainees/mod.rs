//! Trainee Use Case
//!
//! Create, fetch, list, rename and delete trainees. Deleting a trainee also
//! strips the id from every course roster.

mod result;
mod use_case;

pub use result::{TraineeDetails, TraineeRemoval};
pub use use_case::TraineeUseCase;
