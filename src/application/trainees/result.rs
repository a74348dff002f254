//! Trainee use case result types

use crate::domain::entities::Trainee;
use crate::domain::value_objects::EntityId;

/// A trainee together with the names of the courses it is enrolled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraineeDetails {
    pub trainee: Trainee,
    /// Sorted by course name
    pub courses: Vec<String>,
}

/// Result of deleting a trainee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraineeRemoval {
    pub id: EntityId,
    /// Number of course rosters the trainee was removed from
    pub courses_updated: usize,
}
