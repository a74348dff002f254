//! EntityId value object
//!
//! Trainees and courses draw ids from independent namespaces, but both use
//! the same bounded range `[0, MAX_ENTITY_ID]`.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Largest id either collection may hand out.
pub const MAX_ENTITY_ID: u32 = 99_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EntityId(u32);

impl EntityId {
    /// Returns `None` when `value` falls outside the id space.
    pub fn new(value: u32) -> Option<Self> {
        (value <= MAX_ENTITY_ID).then_some(Self(value))
    }

    /// Decode a user-supplied id token.
    pub fn parse(raw: &str) -> RosterResult<Self> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| RosterError::validation(format!("Invalid ID: {}", raw)))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for EntityId {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("id {} is outside 0..={}", value, MAX_ENTITY_ID))
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
