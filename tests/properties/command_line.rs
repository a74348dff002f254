//! Property tests for command line decoding.

use proptest::prelude::*;

use roster::{parse_command, Command, EntityId};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(line in ".{0,80}") {
        let _ = parse_command(&line);
    }

    /// PROPERTY: any in-range id survives decoding regardless of word case.
    #[test]
    fn property_ids_decode(raw in 0u32..=99_999, upper in any::<bool>()) {
        let line = if upper {
            format!("COURSE GET {raw}")
        } else {
            format!("course get {raw}")
        };
        let expected = Command::CourseGet { id: EntityId::new(raw).unwrap() };
        prop_assert_eq!(parse_command(&line).unwrap(), Some(expected));
    }

    /// PROPERTY: ids past the upper bound are rejected.
    #[test]
    fn property_out_of_range_ids_rejected(raw in 100_000u64..10_000_000) {
        let line = format!("TRAINEE DELETE {raw}");
        prop_assert!(parse_command(&line).is_err());
    }
}
