//! Typed commands
//!
//! The closed set of operations the roster accepts. Command lines are decoded
//! into these once, at the presentation boundary, so ids arrive here already
//! validated.

use crate::domain::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TraineeAdd {
        first_name: String,
        last_name: String,
    },
    TraineeGet {
        id: EntityId,
    },
    TraineeList,
    TraineeUpdate {
        id: EntityId,
        first_name: String,
        last_name: String,
    },
    TraineeDelete {
        id: EntityId,
    },
    CourseAdd {
        name: String,
        start_date: String,
    },
    CourseGet {
        id: EntityId,
    },
    CourseList,
    CourseUpdate {
        id: EntityId,
        name: String,
        start_date: String,
    },
    CourseDelete {
        id: EntityId,
    },
    CourseJoin {
        course_id: EntityId,
        trainee_id: EntityId,
    },
    CourseLeave {
        course_id: EntityId,
        trainee_id: EntityId,
    },
}
