// src/export/mod.rs

mod fs_utils;
mod json_yaml;
mod load;

pub use fs_utils::{ensure_dir, write_file, write_files};
pub use json_yaml::{
    to_json_string, to_yaml_string, write_dataset, write_json, write_records, write_yaml,
};
pub use load::{load_records, load_value};

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for every written file.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} saved: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// YAML for `.yaml`/`.yml`, JSON for anything else.
    pub fn from_path(path: &Path) -> Self {
        if crate::utils::path::is_yaml(path) {
            ExportFormat::Yaml
        } else {
            ExportFormat::Json
        }
    }
}
