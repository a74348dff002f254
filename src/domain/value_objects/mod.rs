//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.
//! - `EntityId` - bounded numeric identifier shared by trainees and courses
//! - `StartDate` - strictly validated `yyyy-MM-dd` calendar date

mod entity_id;
mod start_date;

pub use entity_id::{EntityId, MAX_ENTITY_ID};
pub use start_date::StartDate;
