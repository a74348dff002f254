//! Property tests for enrollment invariants.

use proptest::prelude::*;

use roster::domain::services::{enrollment_count, join, leave};
use roster::domain::value_objects::{EntityId, StartDate};
use roster::{Course, Trainee, MAX_COURSE_CAPACITY, MAX_TRAINEE_COURSES};

#[derive(Debug, Clone)]
enum Op {
    Join { course: u32, trainee: u32 },
    Leave { course: u32, trainee: u32 },
}

const COURSES: u32 = 8;
const TRAINEES: u32 = 30;

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..COURSES, 0..TRAINEES).prop_map(|(course, trainee)| Op::Join { course, trainee }),
        1 => (0..COURSES, 0..TRAINEES).prop_map(|(course, trainee)| Op::Leave { course, trainee }),
    ]
}

fn id(n: u32) -> EntityId {
    EntityId::new(n).unwrap()
}

fn fixtures() -> (Vec<Course>, Vec<Trainee>) {
    let date = StartDate::parse("2024-09-01").unwrap();
    let courses = (0..COURSES)
        .map(|n| Course::new(id(n), format!("C{n}"), date))
        .collect();
    let trainees = (0..TRAINEES)
        .map(|n| Trainee::new(id(n), format!("F{n}"), format!("L{n}")))
        .collect();
    (courses, trainees)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no sequence of joins and leaves breaks capacity, the
    /// per-trainee limit, or roster uniqueness.
    #[test]
    fn property_invariants_hold_after_any_sequence(ops in proptest::collection::vec(op(), 0..300)) {
        let (mut courses, trainees) = fixtures();

        for op in ops {
            let _ = match op {
                Op::Join { course, trainee } => {
                    join(&mut courses, id(course), &trainees[trainee as usize])
                }
                Op::Leave { course, trainee } => {
                    leave(&mut courses, id(course), &trainees[trainee as usize])
                }
            };
        }

        for course in &courses {
            prop_assert!(course.participant_count() <= MAX_COURSE_CAPACITY);
            let mut seen = course.participants().to_vec();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), course.participant_count());
        }
        for trainee in &trainees {
            prop_assert!(enrollment_count(&courses, trainee.id) <= MAX_TRAINEE_COURSES);
        }
    }

    /// PROPERTY: join then leave restores the roster; a second join or leave
    /// of the same pair fails.
    #[test]
    fn property_join_leave_pairs(course in 0..COURSES, trainee in 0..TRAINEES) {
        let (mut courses, trainees) = fixtures();
        let trainee = &trainees[trainee as usize];

        prop_assert!(join(&mut courses, id(course), trainee).is_ok());
        prop_assert!(join(&mut courses, id(course), trainee).is_err());
        prop_assert!(leave(&mut courses, id(course), trainee).is_ok());
        prop_assert!(leave(&mut courses, id(course), trainee).is_err());
        prop_assert_eq!(enrollment_count(&courses, trainee.id), 0);
    }
}
