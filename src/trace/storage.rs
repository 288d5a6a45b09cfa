// File system locations and fingerprints for exported traces
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to get app data directory")]
    NoAppDataDir,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Get the app data directory for SortScope
pub fn get_app_data_dir() -> StorageResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(StorageError::NoAppDataDir)?;
    let app_dir = data_dir.join("com.sortscope.app");
    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

/// Get the directory exported traces land in by default
pub fn get_trace_dir() -> StorageResult<PathBuf> {
    let trace_dir = get_app_data_dir()?.join("traces");
    fs::create_dir_all(&trace_dir)?;
    Ok(trace_dir)
}

/// Where exported traces are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Target directory; the app data trace directory when unset
    pub directory: Option<PathBuf>,
}

impl ExportOptions {
    /// Resolve and create the target directory
    pub fn resolve_dir(&self) -> StorageResult<PathBuf> {
        match &self.directory {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Ok(dir.clone())
            }
            None => get_trace_dir(),
        }
    }
}

/// Path of the JSONL file for a run inside `dir`
pub fn trace_file_path(dir: &Path, algorithm: &str, run_id: &Uuid) -> PathBuf {
    dir.join(format!("{}_{}.jsonl", algorithm, run_id))
}

/// Calculate SHA256 hash of an input sequence
///
/// Values are hashed as little-endian bytes in order, so the same sequence
/// always yields the same fingerprint.
pub fn calculate_input_sha256(input: &[i64]) -> String {
    let mut hasher = Sha256::new();
    for value in input {
        hasher.update(value.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}
