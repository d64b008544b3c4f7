// src/export/load.rs

use crate::errors::{AppError, AppResult};
use crate::utils::path::is_yaml;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::ReadFile {
        path: path.display().to_string(),
        source,
    })
}

/// Load a record collection from JSON, or YAML when the extension says so.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = read(path)?;
    debug!(path = %path.display(), bytes = content.len(), "loading records");

    if is_yaml(path) {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Load an arbitrary tree (JSON or YAML) without a schema.
pub fn load_value(path: &Path) -> AppResult<Value> {
    load_records(path)
}
