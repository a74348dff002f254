//! In-memory repository doubles for use case tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{Course, Trainee};
use crate::domain::ports::{CourseRepository, StorageError, StorageResult, TraineeRepository};

#[derive(Default)]
pub(crate) struct InMemoryTrainees {
    trainees: Mutex<Vec<Trainee>>,
    saves: AtomicUsize,
}

impl InMemoryTrainees {
    pub(crate) fn with(trainees: Vec<Trainee>) -> Arc<Self> {
        Arc::new(Self {
            trainees: Mutex::new(trainees),
            saves: AtomicUsize::new(0),
        })
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn snapshot(&self) -> Vec<Trainee> {
        self.trainees.lock().unwrap().clone()
    }
}

impl TraineeRepository for InMemoryTrainees {
    fn load(&self) -> StorageResult<Vec<Trainee>> {
        Ok(self.snapshot())
    }

    fn save(&self, trainees: &[Trainee]) -> StorageResult<()> {
        *self.trainees.lock().unwrap() = trainees.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryCourses {
    courses: Mutex<Vec<Course>>,
    saves: AtomicUsize,
}

impl InMemoryCourses {
    pub(crate) fn with(courses: Vec<Course>) -> Arc<Self> {
        Arc::new(Self {
            courses: Mutex::new(courses),
            saves: AtomicUsize::new(0),
        })
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn snapshot(&self) -> Vec<Course> {
        self.courses.lock().unwrap().clone()
    }
}

impl CourseRepository for InMemoryCourses {
    fn load(&self) -> StorageResult<Vec<Course>> {
        Ok(self.snapshot())
    }

    fn save(&self, courses: &[Course]) -> StorageResult<()> {
        *self.courses.lock().unwrap() = courses.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Course store whose reads always fail.
pub(crate) struct UnreadableCourses;

impl CourseRepository for UnreadableCourses {
    fn load(&self) -> StorageResult<Vec<Course>> {
        Err(StorageError::AccessError {
            message: "permission denied".to_string(),
        })
    }

    fn save(&self, _courses: &[Course]) -> StorageResult<()> {
        Ok(())
    }
}
