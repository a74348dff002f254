//! Trainee entity

use serde::Serialize;

use crate::domain::value_objects::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
}

impl Trainee {
    pub fn new(id: EntityId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", as used in enrollment messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn rename(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
    }
}
