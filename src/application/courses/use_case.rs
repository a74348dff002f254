//! Course Use Case
//!
//! The course collection owns every roster. Join and leave load the course
//! collection, look up the trainee, apply the enrollment rules in memory and
//! persist only when the rules pass.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Course, Trainee};
use crate::domain::ports::{CourseRepository, TraineeRepository};
use crate::domain::services::{self, collate, generate_id};
use crate::domain::value_objects::{EntityId, StartDate};
use crate::error::{RosterError, RosterResult};

use super::result::Enrollment;

pub struct CourseUseCase {
    courses: Arc<dyn CourseRepository>,
    trainees: Arc<dyn TraineeRepository>,
}

impl CourseUseCase {
    pub fn new(courses: Arc<dyn CourseRepository>, trainees: Arc<dyn TraineeRepository>) -> Self {
        Self { courses, trainees }
    }

    pub fn add(&self, name: &str, start_date: &str) -> RosterResult<Course> {
        let start_date = validate(name, start_date)?;

        let mut courses = self.courses.load()?;
        let used: HashSet<EntityId> = courses.iter().map(|c| c.id).collect();
        let course = Course::new(generate_id(&used)?, name, start_date);

        courses.push(course.clone());
        self.courses.save(&courses)?;

        tracing::info!(id = %course.id, name = %course.name, "course created");
        Ok(course)
    }

    pub fn get(&self, id: EntityId) -> RosterResult<Course> {
        self.courses
            .load()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RosterError::course_not_found(id))
    }

    /// All courses ordered by name.
    pub fn list(&self) -> RosterResult<Vec<Course>> {
        let mut courses = self.courses.load()?;
        courses.sort_by(|a, b| collate(&a.name, &b.name));
        Ok(courses)
    }

    /// Overwrite name and start date; the roster is left untouched.
    pub fn update(&self, id: EntityId, name: &str, start_date: &str) -> RosterResult<Course> {
        let start_date = validate(name, start_date)?;

        let mut courses = self.courses.load()?;
        let course = courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RosterError::course_not_found(id))?;

        course.reschedule(name.to_string(), start_date);
        let updated = course.clone();
        self.courses.save(&courses)?;

        tracing::info!(id = %id, "course updated");
        Ok(updated)
    }

    pub fn delete(&self, id: EntityId) -> RosterResult<EntityId> {
        let mut courses = self.courses.load()?;
        let len_before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == len_before {
            return Err(RosterError::course_not_found(id));
        }
        self.courses.save(&courses)?;

        tracing::info!(id = %id, "course deleted");
        Ok(id)
    }

    pub fn join(&self, course_id: EntityId, trainee_id: EntityId) -> RosterResult<Enrollment> {
        let mut courses = self.courses.load()?;
        if !courses.iter().any(|c| c.id == course_id) {
            return Err(RosterError::course_not_found(course_id));
        }
        let trainee = self.find_trainee(trainee_id)?;

        let course = services::join(&mut courses, course_id, &trainee)?;
        self.courses.save(&courses)?;

        tracing::info!(course = %course_id, trainee = %trainee_id, "trainee joined course");
        Ok(Enrollment { trainee, course })
    }

    pub fn leave(&self, course_id: EntityId, trainee_id: EntityId) -> RosterResult<Enrollment> {
        let mut courses = self.courses.load()?;
        if !courses.iter().any(|c| c.id == course_id) {
            return Err(RosterError::course_not_found(course_id));
        }
        let trainee = self.find_trainee(trainee_id)?;

        let course = services::leave(&mut courses, course_id, &trainee)?;
        self.courses.save(&courses)?;

        tracing::info!(course = %course_id, trainee = %trainee_id, "trainee left course");
        Ok(Enrollment { trainee, course })
    }

    fn find_trainee(&self, id: EntityId) -> RosterResult<Trainee> {
        self.trainees
            .load()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| RosterError::trainee_not_found(id))
    }
}

fn validate(name: &str, start_date: &str) -> RosterResult<StartDate> {
    if name.trim().is_empty() {
        return Err(RosterError::validation("Course name can not be empty"));
    }
    StartDate::parse(start_date)
}
