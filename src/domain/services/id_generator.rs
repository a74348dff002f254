//! Unique id generation
//!
//! Draws random ids from `[0, MAX_ENTITY_ID]` and falls back to an ascending
//! scan when every draw collides. Each collection calls this with its own
//! set of used ids.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::value_objects::{EntityId, MAX_ENTITY_ID};
use crate::error::{RosterError, RosterResult};

/// Random draws attempted before switching to the linear scan.
pub const RANDOM_ATTEMPTS: usize = 2000;

/// Generate an id not contained in `used`, using the thread-local RNG.
pub fn generate_id(used: &HashSet<EntityId>) -> RosterResult<EntityId> {
    generate_id_with(&mut rand::thread_rng(), used, RANDOM_ATTEMPTS)
}

pub fn generate_id_with<R: Rng + ?Sized>(
    rng: &mut R,
    used: &HashSet<EntityId>,
    attempts: usize,
) -> RosterResult<EntityId> {
    for _ in 0..attempts {
        if let Some(id) = EntityId::new(rng.gen_range(0..=MAX_ENTITY_ID)) {
            if !used.contains(&id) {
                return Ok(id);
            }
        }
    }

    tracing::debug!(attempts, used = used.len(), "random id draws exhausted, scanning");

    (0..=MAX_ENTITY_ID)
        .filter_map(EntityId::new)
        .find(|id| !used.contains(id))
        .ok_or(RosterError::ExhaustedIdSpace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(range: impl Iterator<Item = u32>) -> HashSet<EntityId> {
        range.filter_map(EntityId::new).collect()
    }

    #[test]
    fn generated_id_is_unused() {
        let used = ids(0..1000);
        let id = generate_id(&used).unwrap();
        assert!(!used.contains(&id));
        assert!(id.value() <= MAX_ENTITY_ID);
    }

    #[test]
    fn scan_returns_first_gap_when_draws_disabled() {
        let used = ids((0..=MAX_ENTITY_ID).filter(|n| *n != 31_337 && *n != 50_000));
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_id_with(&mut rng, &used, 0).unwrap();
        assert_eq!(id.value(), 31_337);
    }

    #[test]
    fn scan_finds_the_only_free_id_after_collisions() {
        let used = ids((0..=MAX_ENTITY_ID).filter(|n| *n != 99_999));
        let mut rng = StdRng::seed_from_u64(1);
        let id = generate_id_with(&mut rng, &used, 10).unwrap();
        assert_eq!(id.value(), 99_999);
    }

    #[test]
    fn exhausted_space_is_an_error() {
        let used = ids(0..=MAX_ENTITY_ID);
        let err = generate_id(&used).unwrap_err();
        assert!(matches!(err, RosterError::ExhaustedIdSpace));
    }

    #[test]
    fn zero_is_a_valid_result() {
        let used = ids(1..=MAX_ENTITY_ID);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_id_with(&mut rng, &used, 0).unwrap().value(), 0);
    }
}
