//! Property tests for id generation.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use roster::domain::services::generate_id_with;
use roster::domain::value_objects::{EntityId, MAX_ENTITY_ID};

fn used_ids() -> impl Strategy<Value = HashSet<EntityId>> {
    proptest::collection::hash_set(0..=MAX_ENTITY_ID, 0..200)
        .prop_map(|raw| raw.into_iter().filter_map(EntityId::new).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a generated id is never already in use and stays in range.
    #[test]
    fn property_generated_id_is_fresh(used in used_ids(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let id = generate_id_with(&mut rng, &used, 2000).unwrap();

        prop_assert!(!used.contains(&id));
        prop_assert!(id.value() <= MAX_ENTITY_ID);
    }

    /// PROPERTY: with zero random attempts the fallback scan still finds the
    /// lowest free id.
    #[test]
    fn property_scan_returns_lowest_free(used in used_ids()) {
        let mut rng = StdRng::seed_from_u64(0);
        let id = generate_id_with(&mut rng, &used, 0).unwrap();

        let lowest = (0..=MAX_ENTITY_ID)
            .filter_map(EntityId::new)
            .find(|candidate| !used.contains(candidate))
            .unwrap();
        prop_assert_eq!(id, lowest);
    }
}
