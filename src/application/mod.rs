//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TraineeUseCase` - Trainee CRUD with cascade delete into rosters
//! - `CourseUseCase` - Course CRUD plus join/leave
//! - `Roster` - Routes a typed `Command` to the right use case

pub mod command;
pub mod courses;
pub mod outcome;
pub mod roster;
#[cfg(test)]
pub(crate) mod testing;
pub mod trainees;

pub use command::Command;
pub use courses::{CourseUseCase, Enrollment};
pub use outcome::Outcome;
pub use roster::Roster;
pub use trainees::{TraineeDetails, TraineeRemoval, TraineeUseCase};
