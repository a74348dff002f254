//! JSON Trainee Repository
//!
//! Persists trainees as a JSON array of `{id, firstName, lastName}` records.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Trainee;
use crate::domain::ports::{StorageResult, TraineeRepository};
use crate::domain::value_objects::EntityId;

use super::json_file::JsonArrayFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonTrainee {
    id: EntityId,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

pub struct JsonTraineeRepository {
    file: JsonArrayFile,
}

impl JsonTraineeRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: JsonArrayFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl TraineeRepository for JsonTraineeRepository {
    fn load(&self) -> StorageResult<Vec<Trainee>> {
        let records: Vec<JsonTrainee> = self.file.read()?;
        Ok(records.into_iter().map(from_json).collect())
    }

    fn save(&self, trainees: &[Trainee]) -> StorageResult<()> {
        let records: Vec<JsonTrainee> = trainees.iter().map(to_json).collect();
        self.file.write(&records)
    }
}

fn from_json(record: JsonTrainee) -> Trainee {
    Trainee::new(record.id, record.first_name, record.last_name)
}

fn to_json(trainee: &Trainee) -> JsonTrainee {
    JsonTrainee {
        id: trainee.id,
        first_name: trainee.first_name.clone(),
        last_name: trainee.last_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let repo = JsonTraineeRepository::with_path(dir.path().join("trainees.json"));

        let ann = Trainee::new(EntityId::new(12).unwrap(), "Ann", "Lee");
        repo.save(std::slice::from_ref(&ann)).unwrap();

        assert_eq!(repo.load().unwrap(), vec![ann]);
    }

    #[test]
    fn save_writes_camel_case_records() {
        let dir = tempdir().unwrap();
        let repo = JsonTraineeRepository::with_path(dir.path().join("trainees.json"));
        repo.save(&[Trainee::new(EntityId::new(0).unwrap(), "Ann", "Lee")])
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{ "id": 0, "firstName": "Ann", "lastName": "Lee" }])
        );
    }

    #[test]
    fn load_skips_records_with_bad_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trainees.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "firstName": "Ann", "lastName": "Lee"},
                {"id": -5, "firstName": "Neg", "lastName": "Ative"},
                {"id": "7", "firstName": "Str", "lastName": "Ing"},
                {"id": 100000, "firstName": "Out", "lastName": "Side"}
            ]"#,
        )
        .unwrap();

        let repo = JsonTraineeRepository::with_path(path);
        let trainees = repo.load().unwrap();
        assert_eq!(
            trainees,
            vec![Trainee::new(EntityId::new(1).unwrap(), "Ann", "Lee")]
        );
    }

    #[test]
    fn saving_after_a_bad_record_keeps_valid_ones() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trainees.json");
        fs::write(
            &path,
            r#"[{"id": 1, "firstName": "Ann", "lastName": "Lee"},
                {"id": -5, "firstName": "Bad", "lastName": "Id"}]"#,
        )
        .unwrap();

        let repo = JsonTraineeRepository::with_path(path);
        let mut trainees = repo.load().unwrap();
        trainees.push(Trainee::new(EntityId::new(2).unwrap(), "New", "One"));
        repo.save(&trainees).unwrap();

        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].full_name(), "Ann Lee");
    }
}
