//! Enrollment rules
//!
//! The join/leave state of a (trainee, course) pair is always derived from
//! roster membership; there is no separate flag to keep in sync.
//!
//! Join checks run in a fixed order: duplicate, course capacity, then the
//! trainee's enrollment limit. Existence of both entities is checked by the
//! caller before any of these rules apply.

use crate::domain::entities::{Course, Trainee, MAX_TRAINEE_COURSES};
use crate::domain::value_objects::EntityId;
use crate::error::{RosterError, RosterResult};

/// Number of courses whose roster includes `trainee`.
pub fn enrollment_count(courses: &[Course], trainee: EntityId) -> usize {
    courses.iter().filter(|c| c.has_participant(trainee)).count()
}

/// Courses whose roster includes `trainee`, in storage order.
pub fn courses_of(courses: &[Course], trainee: EntityId) -> Vec<&Course> {
    courses.iter().filter(|c| c.has_participant(trainee)).collect()
}

/// Add `trainee` to the roster of course `course_id`, returning the updated course.
pub fn join(courses: &mut [Course], course_id: EntityId, trainee: &Trainee) -> RosterResult<Course> {
    let enrolled = enrollment_count(courses, trainee.id);
    let course = courses
        .iter_mut()
        .find(|c| c.id == course_id)
        .ok_or_else(|| RosterError::course_not_found(course_id))?;

    if course.has_participant(trainee.id) {
        return Err(RosterError::DuplicateRelation {
            trainee: trainee.full_name(),
            course: course.name.clone(),
        });
    }

    if course.is_full() {
        return Err(RosterError::CapacityExceeded {
            course: course.name.clone(),
        });
    }

    if enrolled >= MAX_TRAINEE_COURSES {
        return Err(RosterError::TraineeOverCommitted {
            limit: MAX_TRAINEE_COURSES,
        });
    }

    course.add_participant(trainee.id);
    Ok(course.clone())
}

/// Remove `trainee` from the roster of course `course_id`, returning the updated course.
pub fn leave(courses: &mut [Course], course_id: EntityId, trainee: &Trainee) -> RosterResult<Course> {
    let course = courses
        .iter_mut()
        .find(|c| c.id == course_id)
        .ok_or_else(|| RosterError::course_not_found(course_id))?;

    if !course.remove_participant(trainee.id) {
        return Err(RosterError::MissingRelation {
            trainee: trainee.full_name(),
            course: course.name.clone(),
        });
    }
    Ok(course.clone())
}

/// Strip `trainee` from every roster. Returns how many courses changed.
pub fn withdraw_everywhere(courses: &mut [Course], trainee: EntityId) -> usize {
    courses
        .iter_mut()
        .map(|c| c.remove_participant(trainee))
        .filter(|changed| *changed)
        .count()
}
