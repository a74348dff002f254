//! Course use case result types

use crate::domain::entities::{Course, Trainee};

/// The pair touched by a join or leave, as persisted afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub trainee: Trainee,
    pub course: Course,
}
