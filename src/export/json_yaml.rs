// src/export/json_yaml.rs

use crate::errors::AppResult;
use crate::export::{ExportFormat, notify_export_success, write_file, write_files};
use crate::utils::path::timestamped;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Pretty JSON, 2-space indent, non-ASCII left as is.
pub fn to_json_string<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

/// Block-style YAML, non-ASCII left as is.
pub fn to_yaml_string<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    Ok(serde_yaml::to_string(data)?)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> AppResult<()> {
    let json = to_json_string(data)?;
    write_file(path, &json)?;
    notify_export_success("JSON", path);
    Ok(())
}

pub fn write_yaml<T: Serialize + ?Sized>(path: &Path, data: &T) -> AppResult<()> {
    let yaml = to_yaml_string(data)?;
    write_file(path, &yaml)?;
    notify_export_success("YAML", path);
    Ok(())
}

/// Write `data` in the format picked from the file extension.
pub fn write_records<T: Serialize + ?Sized>(path: &Path, data: &T) -> AppResult<()> {
    match ExportFormat::from_path(path) {
        ExportFormat::Json => write_json(path, data),
        ExportFormat::Yaml => write_yaml(path, data),
    }
}

/// Write `<dir>/<stem>_<timestamp>.json` and `.yaml`; returns both paths.
/// Both documents are serialized before either file is touched, and either
/// both files are written or neither is.
pub fn write_dataset<T: Serialize + ?Sized>(
    dir: &Path,
    stem: &str,
    timestamp: &str,
    data: &T,
) -> AppResult<(PathBuf, PathBuf)> {
    let json = to_json_string(data)?;
    let yaml = to_yaml_string(data)?;

    let json_path = timestamped(dir, stem, timestamp, ExportFormat::Json.as_str());
    let yaml_path = timestamped(dir, stem, timestamp, ExportFormat::Yaml.as_str());

    write_files(&[
        (json_path.as_path(), json.as_str()),
        (yaml_path.as_path(), yaml.as_str()),
    ])?;
    notify_export_success("JSON", &json_path);
    notify_export_success("YAML", &yaml_path);

    Ok((json_path, yaml_path))
}
