use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read persisted session: {0}")]
    Read(String),
    #[error("failed to write persisted session: {0}")]
    Write(String),
    #[error("persisted session is malformed: {0}")]
    Malformed(String),
}

/// Durable record of an authenticated session.
///
/// Field names match the durable-storage keys of the original console
/// deployment so an existing session file rehydrates unchanged. The
/// legacy `userRole` entry is read for logout-endpoint fallback and
/// removed on clear; it is never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(rename = "authToken")]
    pub token: String,
    #[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(rename = "userRoles", default)]
    pub roles: Vec<String>,
    #[serde(rename = "userPermissions", default)]
    pub permissions: Vec<String>,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "userRole", default, skip_serializing_if = "Option::is_none")]
    pub legacy_role: Option<String>,
}

/// Single persistence boundary for session state. One record, one write;
/// there is no partially persisted session.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> StorageResult<Option<PersistedSession>>;
    fn store(&self, record: &PersistedSession) -> StorageResult<()>;
    fn clear(&self) -> StorageResult<()>;
}

/// File-backed storage: one JSON document, replaced atomically via a
/// temp-file rename so a crash mid-write leaves the previous record
/// intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = match self.path.file_name() {
            Some(name) => name.to_os_string(),
            None => std::ffi::OsString::from("session"),
        };
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> StorageResult<Option<PersistedSession>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Read(err.to_string())),
        };

        let record = serde_json::from_str(&contents)
            .map_err(|err| StorageError::Malformed(err.to_string()))?;
        Ok(Some(record))
    }

    fn store(&self, record: &PersistedSession) -> StorageResult<()> {
        let body = serde_json::to_vec_pretty(record)
            .map_err(|err| StorageError::Write(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StorageError::Write(err.to_string()))?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, body).map_err(|err| StorageError::Write(err.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|err| StorageError::Write(err.to_string()))?;
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write(err.to_string())),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<Option<PersistedSession>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<PersistedSession>> {
        let guard = self.inner.lock().expect("storage mutex poisoned");
        Ok(guard.clone())
    }

    fn store(&self, record: &PersistedSession) -> StorageResult<()> {
        let mut guard = self.inner.lock().expect("storage mutex poisoned");
        *guard = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let mut guard = self.inner.lock().expect("storage mutex poisoned");
        *guard = None;
        Ok(())
    }
}
