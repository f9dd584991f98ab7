use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Task;

/// Error type for tasks-file loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the task collection from a JSON file (an array of task records).
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
