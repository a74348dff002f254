//! JSON array file
//!
//! Shared load/save mechanics for the collection repositories. Reads are
//! forgiving: a missing, blank or unparsable file yields an empty vector, and
//! inside a well-formed array each malformed record is skipped on its own.
//! Writes take an exclusive lock on a sibling `.lock` file and replace the
//! target through a temporary file in the same directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::domain::ports::{StorageError, StorageResult};

#[derive(Debug, Clone)]
pub(crate) struct JsonArrayFile {
    path: PathBuf,
}

impl JsonArrayFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    pub(crate) fn read<T: DeserializeOwned>(&self) -> StorageResult<Vec<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(access_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&content) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "store is not a valid JSON array, treating as empty"
                );
                return Ok(Vec::new());
            }
        };

        let total = values.len();
        let records: Vec<T> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        index,
                        error = %e,
                        "skipping malformed record"
                    );
                    None
                }
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            skipped = total - records.len(),
            "loaded store"
        );
        Ok(records)
    }

    pub(crate) fn write<T: Serialize>(&self, records: &[T]) -> StorageResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(access_error)?;

        let content = serde_json::to_string_pretty(records).map_err(|e| {
            StorageError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let lock_file = fs::File::create(self.lock_path()).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = replace_contents(&parent, &self.path, content.as_bytes());

        let _ = lock_file.unlock();
        if result.is_ok() {
            tracing::debug!(path = %self.path.display(), count = records.len(), "saved store");
        }
        result
    }
}

fn replace_contents(dir: &Path, target: &Path, content: &[u8]) -> StorageResult<()> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(access_error)?;
    tmp.write_all(content).map_err(access_error)?;
    tmp.as_file().sync_all().map_err(access_error)?;
    tmp.persist(target).map_err(|e| access_error(e.error))?;
    Ok(())
}

fn access_error(e: std::io::Error) -> StorageError {
    StorageError::AccessError {
        message: e.to_string(),
    }
}
