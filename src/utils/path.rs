//! Path utilities: expand ~, build timestamped output names, find the newest dataset file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/<stem>_<timestamp>.<ext>`
pub fn timestamped(dir: &Path, stem: &str, timestamp: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}_{timestamp}.{ext}"))
}

/// Newest file in `dir` named `<prefix>*.<ext>`, by reverse name order.
/// Timestamped names sort chronologically, so the last one is the latest run.
pub fn latest_matching(dir: &Path, prefix: &str, ext: &str) -> io::Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let suffix = format!(".{ext}");
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix) && name.ends_with(&suffix))
        .collect();

    names.sort();
    Ok(names.pop().map(|name| dir.join(name)))
}

/// True when the extension says YAML (`.yaml` / `.yml`, any case).
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}
