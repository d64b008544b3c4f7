// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Create `dir` (and parents) if missing.
pub fn ensure_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::Export(format!("cannot create directory {}: {e}", dir.display()))
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(path: &Path, e: std::io::Error) -> AppError {
    AppError::Export(format!("cannot write {}: {e}", path.display()))
}

/// Write `contents` to `path` through a sibling temp file and a rename,
/// so a failed write never leaves a truncated output behind.
pub fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    write_files(&[(path, contents)])
}

/// Write a group of files that belong together.
///
/// Every file is staged as `<name>.tmp` first and only renamed once all of
/// them are on disk. On failure the temp files are removed, and so are the
/// files of this group already renamed, leaving none of the group behind.
pub fn write_files(files: &[(&Path, &str)]) -> AppResult<()> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(files.len());

    for &(path, contents) in files {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && let Err(e) = ensure_dir(dir)
        {
            discard(&staged, 0);
            return Err(e);
        }

        let tmp = tmp_path(path);
        if let Err(e) = fs::write(&tmp, contents) {
            let _ = fs::remove_file(&tmp);
            discard(&staged, 0);
            return Err(write_error(path, e));
        }
        staged.push((tmp, path));
    }

    for (i, (tmp, path)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(tmp, path) {
            discard(&staged, i);
            return Err(write_error(path, e));
        }
    }

    Ok(())
}

/// Undo a partial group write: entries before `renamed` already reached
/// their final name, the rest are still temp files.
fn discard(staged: &[(PathBuf, &Path)], renamed: usize) {
    for (i, (tmp, path)) in staged.iter().enumerate() {
        let leftover: &Path = if i < renamed { path } else { tmp };
        let _ = fs::remove_file(leftover);
    }
}
