//! Course entity
//!
//! A course exclusively owns its participant roster. The roster never holds
//! the same trainee twice and never grows beyond `MAX_COURSE_CAPACITY`.

use serde::Serialize;

use crate::domain::value_objects::{EntityId, StartDate};

/// Maximum roster size of a single course.
pub const MAX_COURSE_CAPACITY: usize = 20;

/// Maximum number of courses a trainee may be enrolled in at once.
pub const MAX_TRAINEE_COURSES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    /// Kept as text so stores written by older builds still load.
    pub start_date: String,
    participants: Vec<EntityId>,
}

impl Course {
    /// A fresh course with an empty roster.
    pub fn new(id: EntityId, name: impl Into<String>, start_date: StartDate) -> Self {
        Self {
            id,
            name: name.into(),
            start_date: start_date.to_string(),
            participants: Vec::new(),
        }
    }

    /// Rebuild a course from persisted data, dropping repeated roster entries.
    pub fn restore(
        id: EntityId,
        name: String,
        start_date: String,
        participants: Vec<EntityId>,
    ) -> Self {
        let mut course = Self {
            id,
            name,
            start_date,
            participants: Vec::with_capacity(participants.len()),
        };
        for trainee in participants {
            if !course.participants.contains(&trainee) {
                course.participants.push(trainee);
            }
        }
        course
    }

    pub fn participants(&self) -> &[EntityId] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn has_participant(&self, trainee: EntityId) -> bool {
        self.participants.contains(&trainee)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= MAX_COURSE_CAPACITY
    }

    pub fn reschedule(&mut self, name: String, start_date: StartDate) {
        self.name = name;
        self.start_date = start_date.to_string();
    }

    /// Append `trainee` to the roster. Returns false if already present or full.
    pub(crate) fn add_participant(&mut self, trainee: EntityId) -> bool {
        if self.has_participant(trainee) || self.is_full() {
            return false;
        }
        self.participants.push(trainee);
        true
    }

    /// Returns true if `trainee` was on the roster.
    pub(crate) fn remove_participant(&mut self, trainee: EntityId) -> bool {
        let len_before = self.participants.len();
        self.participants.retain(|p| *p != trainee);
        self.participants.len() != len_before
    }
}
