//! Trainee Use Case
//!
//! Every operation runs a full load, mutate, save cycle against the
//! repositories. Validation happens before any save, so a rejected
//! operation never leaves a store modified.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::Trainee;
use crate::domain::ports::{CourseRepository, TraineeRepository};
use crate::domain::services::{collate, courses_of, generate_id, withdraw_everywhere};
use crate::domain::value_objects::EntityId;
use crate::error::{RosterError, RosterResult};

use super::result::{TraineeDetails, TraineeRemoval};

pub struct TraineeUseCase {
    trainees: Arc<dyn TraineeRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl TraineeUseCase {
    pub fn new(trainees: Arc<dyn TraineeRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { trainees, courses }
    }

    pub fn add(&self, first_name: &str, last_name: &str) -> RosterResult<Trainee> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(RosterError::validation(
                "Trainee first and last name can not be empty",
            ));
        }

        let mut trainees = self.trainees.load()?;
        let used: HashSet<EntityId> = trainees.iter().map(|t| t.id).collect();
        let trainee = Trainee::new(generate_id(&used)?, first_name, last_name);

        trainees.push(trainee.clone());
        self.trainees.save(&trainees)?;

        tracing::info!(id = %trainee.id, "trainee created");
        Ok(trainee)
    }

    pub fn get(&self, id: EntityId) -> RosterResult<TraineeDetails> {
        let trainee = self.find(id)?;

        let courses = self.courses.load()?;
        let mut names: Vec<String> = courses_of(&courses, id)
            .into_iter()
            .map(|c| c.name.clone())
            .collect();
        names.sort_by(|a, b| collate(a, b));

        Ok(TraineeDetails {
            trainee,
            courses: names,
        })
    }

    /// All trainees, ascending by id.
    pub fn list(&self) -> RosterResult<Vec<Trainee>> {
        let mut trainees = self.trainees.load()?;
        trainees.sort_by_key(|t| t.id);
        Ok(trainees)
    }

    /// Overwrite both names. Emptiness is not re-checked here.
    pub fn update(
        &self,
        id: EntityId,
        first_name: String,
        last_name: String,
    ) -> RosterResult<Trainee> {
        let mut trainees = self.trainees.load()?;
        let trainee = trainees
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RosterError::trainee_not_found(id))?;

        trainee.rename(first_name, last_name);
        let updated = trainee.clone();
        self.trainees.save(&trainees)?;

        tracing::info!(id = %id, "trainee updated");
        Ok(updated)
    }

    pub fn delete(&self, id: EntityId) -> RosterResult<TraineeRemoval> {
        let mut trainees = self.trainees.load()?;
        let len_before = trainees.len();
        trainees.retain(|t| t.id != id);
        if trainees.len() == len_before {
            return Err(RosterError::trainee_not_found(id));
        }
        let mut courses = self.courses.load()?;
        self.trainees.save(&trainees)?;

        let courses_updated = withdraw_everywhere(&mut courses, id);
        if courses_updated > 0 {
            self.courses.save(&courses)?;
        }

        tracing::info!(id = %id, courses_updated, "trainee deleted");
        Ok(TraineeRemoval {
            id,
            courses_updated,
        })
    }

    fn find(&self, id: EntityId) -> RosterResult<Trainee> {
        self.trainees
            .load()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| RosterError::trainee_not_found(id))
    }
}
