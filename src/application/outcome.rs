//! Command outcomes
//!
//! `Display` renders the line protocol shown to users; `Serialize` backs the
//! `--json` output mode.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::{Course, Trainee, MAX_COURSE_CAPACITY};
use crate::domain::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    TraineeCreated { trainee: Trainee },
    TraineeDetails { trainee: Trainee, courses: Vec<String> },
    TraineeList { trainees: Vec<Trainee> },
    TraineeUpdated { trainee: Trainee },
    TraineeDeleted { id: EntityId },
    CourseCreated { course: Course },
    CourseDetails { course: Course },
    CourseList { courses: Vec<Course> },
    CourseUpdated { course: Course },
    CourseDeleted { id: EntityId },
    Joined { trainee: Trainee, course: Course },
    Left { trainee: Trainee, course: Course },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::TraineeCreated { trainee } => {
                write!(f, "CREATED: {}", trainee_line(trainee))
            }
            Outcome::TraineeDetails { trainee, courses } => {
                let courses = if courses.is_empty() {
                    "None".to_string()
                } else {
                    courses.join(", ")
                };
                write!(f, "{}\nCourses: {}", trainee_line(trainee), courses)
            }
            Outcome::TraineeList { trainees } => {
                writeln!(f, "Trainees:")?;
                for trainee in trainees {
                    writeln!(f, "{}", trainee_line(trainee))?;
                }
                write!(f, "Total: {}", trainees.len())
            }
            Outcome::TraineeUpdated { trainee } => {
                write!(f, "UPDATED: {}", trainee_line(trainee))
            }
            Outcome::TraineeDeleted { id } | Outcome::CourseDeleted { id } => {
                write!(f, "DELETED: {}", id)
            }
            Outcome::CourseCreated { course } => write!(f, "CREATED: {}", course_line(course)),
            Outcome::CourseDetails { course } => {
                write!(f, "{} {}", course_line(course), course.participant_count())
            }
            Outcome::CourseList { courses } => {
                writeln!(f, "Courses:")?;
                for course in courses {
                    let full = if course.is_full() { " FULL" } else { "" };
                    writeln!(
                        f,
                        "{} {}/{}{}",
                        course_line(course),
                        course.participant_count(),
                        MAX_COURSE_CAPACITY,
                        full
                    )?;
                }
                write!(f, "Total: {}", courses.len())
            }
            Outcome::CourseUpdated { course } => write!(f, "UPDATED: {}", course_line(course)),
            Outcome::Joined { trainee, course } => {
                write!(f, "{} joined {}", trainee.full_name(), course.name)
            }
            Outcome::Left { trainee, course } => {
                write!(f, "{} left {}", trainee.full_name(), course.name)
            }
        }
    }
}

fn trainee_line(trainee: &Trainee) -> String {
    format!("{} {} {}", trainee.id, trainee.first_name, trainee.last_name)
}

fn course_line(course: &Course) -> String {
    format!("{} {} {}", course.id, course.name, course.start_date)
}
