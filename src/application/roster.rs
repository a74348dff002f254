//! Roster service
//!
//! Owns both use cases and routes a typed `Command` to the right one.
//! Constructed once per session with handles to the two repositories.

use std::sync::Arc;

use crate::domain::ports::{CourseRepository, TraineeRepository};
use crate::error::RosterResult;

use super::command::Command;
use super::courses::CourseUseCase;
use super::outcome::Outcome;
use super::trainees::TraineeUseCase;

pub struct Roster {
    trainees: TraineeUseCase,
    courses: CourseUseCase,
}

impl Roster {
    pub fn new(
        trainee_repo: Arc<dyn TraineeRepository>,
        course_repo: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            trainees: TraineeUseCase::new(trainee_repo.clone(), course_repo.clone()),
            courses: CourseUseCase::new(course_repo, trainee_repo),
        }
    }

    pub fn execute(&self, command: Command) -> RosterResult<Outcome> {
        tracing::debug!(?command, "executing command");

        let outcome = match command {
            Command::TraineeAdd {
                first_name,
                last_name,
            } => Outcome::TraineeCreated {
                trainee: self.trainees.add(&first_name, &last_name)?,
            },
            Command::TraineeGet { id } => {
                let details = self.trainees.get(id)?;
                Outcome::TraineeDetails {
                    trainee: details.trainee,
                    courses: details.courses,
                }
            }
            Command::TraineeList => Outcome::TraineeList {
                trainees: self.trainees.list()?,
            },
            Command::TraineeUpdate {
                id,
                first_name,
                last_name,
            } => Outcome::TraineeUpdated {
                trainee: self.trainees.update(id, first_name, last_name)?,
            },
            Command::TraineeDelete { id } => Outcome::TraineeDeleted {
                id: self.trainees.delete(id)?.id,
            },
            Command::CourseAdd { name, start_date } => Outcome::CourseCreated {
                course: self.courses.add(&name, &start_date)?,
            },
            Command::CourseGet { id } => Outcome::CourseDetails {
                course: self.courses.get(id)?,
            },
            Command::CourseList => Outcome::CourseList {
                courses: self.courses.list()?,
            },
            Command::CourseUpdate {
                id,
                name,
                start_date,
            } => Outcome::CourseUpdated {
                course: self.courses.update(id, &name, &start_date)?,
            },
            Command::CourseDelete { id } => Outcome::CourseDeleted {
                id: self.courses.delete(id)?,
            },
            Command::CourseJoin {
                course_id,
                trainee_id,
            } => {
                let enrollment = self.courses.join(course_id, trainee_id)?;
                Outcome::Joined {
                    trainee: enrollment.trainee,
                    course: enrollment.course,
                }
            }
            Command::CourseLeave {
                course_id,
                trainee_id,
            } => {
                let enrollment = self.courses.leave(course_id, trainee_id)?;
                Outcome::Left {
                    trainee: enrollment.trainee,
                    course: enrollment.course,
                }
            }
        };

        Ok(outcome)
    }
}
