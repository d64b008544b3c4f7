#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbiccame::models::{CalendarEvent, EventType, ProfileRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// rbiccame binary with colours off and a config path that does not exist,
/// so every run uses the built-in defaults.
pub fn rbc(tmp: &TempDir) -> Command {
    rbc_with_config(&tmp.path().join("missing.conf"))
}

/// rbiccame binary reading its configuration from `config`
pub fn rbc_with_config(config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rbiccame");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

pub fn tmp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write `content` to `<dir>/<name>` and return the full path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Files in `dir` whose name starts with `prefix` and ends with `ext`
pub fn files_with(dir: &Path, prefix: &str, ext: &str) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let name = p.file_name().unwrap().to_string_lossy().to_string();
            name.starts_with(prefix) && name.ends_with(ext)
        })
        .collect();
    out.sort();
    out
}

pub fn profile(key: Option<&str>, name: &str) -> ProfileRecord {
    let p = ProfileRecord::new(name);
    match key {
        Some(k) => p.with_key(k),
        None => p,
    }
}

pub fn birthday_event(date: &str, key: &str, years: Option<u32>) -> CalendarEvent {
    let mut e = CalendarEvent::new(
        date,
        Some(key),
        "擬人化記念日",
        EventType::CharacterBirthday,
    );
    e.years = years;
    e
}

pub const CALENDAR_JSON: &str = r#"[
  {"date": "2025-05-01", "key": "mito", "event_text": "水戸ちゃん擬人化5周年", "event_type": "character_birthday", "years": 5},
  {"date": "2025-05-02", "key": "kashiwa", "event_text": "柏店 店舗誕生15周年", "event_type": "store_birthday", "years": 15},
  {"date": "2025-06-01", "key": "nobody", "event_text": "擬人化1周年", "event_type": "character_birthday", "years": 1}
]"#;

pub const CHARACTERS_JSON: &str = r#"[
  {"character_name": "水戸", "store_name": "水戸駅店", "key": "mito"},
  {"character_name": "柏", "key": "kashiwa"},
  {"character_name": "ナイセン"}
]"#;
