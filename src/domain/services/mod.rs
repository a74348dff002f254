//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod collation;
mod enrollment;
mod id_generator;

pub use collation::collate;
pub use enrollment::{courses_of, enrollment_count, join, leave, withdraw_everywhere};
pub use id_generator::{generate_id, generate_id_with, RANDOM_ATTEMPTS};
