//! JSON Course Repository
//!
//! Persists courses as a JSON array of
//! `{id, name, startDate, participants}` records. A missing, `null` or
//! non-array `participants` field loads as an empty roster, and participant
//! entries that are not valid ids are dropped.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::Course;
use crate::domain::ports::{CourseRepository, StorageResult};
use crate::domain::value_objects::EntityId;

use super::json_file::JsonArrayFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonCourse {
    id: EntityId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    start_date: String,
    #[serde(default, deserialize_with = "lenient_participants")]
    participants: Vec<EntityId>,
}

fn lenient_participants<'de, D>(deserializer: D) -> Result<Vec<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(values) => values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(ids)
}

pub struct JsonCourseRepository {
    file: JsonArrayFile,
}

impl JsonCourseRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: JsonArrayFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl CourseRepository for JsonCourseRepository {
    fn load(&self) -> StorageResult<Vec<Course>> {
        let records: Vec<JsonCourse> = self.file.read()?;
        Ok(records.into_iter().map(from_json).collect())
    }

    fn save(&self, courses: &[Course]) -> StorageResult<()> {
        let records: Vec<JsonCourse> = courses.iter().map(to_json).collect();
        self.file.write(&records)
    }
}

fn from_json(record: JsonCourse) -> Course {
    Course::restore(record.id, record.name, record.start_date, record.participants)
}

fn to_json(course: &Course) -> JsonCourse {
    JsonCourse {
        id: course.id,
        name: course.name.clone(),
        start_date: course.start_date.clone(),
        participants: course.participants().to_vec(),
    }
}
