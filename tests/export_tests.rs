mod common;
use common::{CHARACTERS_JSON, files_with, profile, tmp_dir, write_fixture};
use rbiccame::export::{
    load_records, to_json_string, write_dataset, write_files, write_records,
};
use rbiccame::models::ProfileRecord;
use std::fs;

#[test]
fn test_json_output_keeps_japanese_and_omits_missing_fields() {
    let mut p = profile(Some("mito"), "水戸");
    p.set_character_birthday("2020-05-01");

    let json = to_json_string(&vec![p]).unwrap();

    assert!(json.contains("\"character_name\": \"水戸\""));
    assert!(json.contains("\n  {\n    \"character_name\""));
    assert!(!json.contains("\\u"));
    assert!(!json.contains("null"));
    assert!(!json.contains("store_name"));
}

#[test]
fn test_unknown_fields_survive_load_and_save() {
    let tmp = tmp_dir();
    let input = write_fixture(
        tmp.path(),
        "chars.yaml",
        "- character_name: 水戸\n  key: mito\n  prefecture: 茨城県\n  is_biccame_musume: true\n",
    );

    let characters: Vec<ProfileRecord> = load_records(&input).unwrap();
    assert_eq!(characters[0].is_biccame_musume(), Some(true));
    assert_eq!(characters[0].str_field("prefecture"), Some("茨城県"));

    let out = tmp.path().join("out.json");
    write_records(&out, &characters).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"prefecture\": \"茨城県\""));
}

#[test]
fn test_write_records_picks_format_from_extension() {
    let tmp = tmp_dir();
    let characters = vec![profile(Some("mito"), "水戸")];

    let yaml_path = tmp.path().join("out.yml");
    write_records(&yaml_path, &characters).unwrap();
    let yaml = fs::read_to_string(&yaml_path).unwrap();
    assert!(yaml.contains("character_name: 水戸"));
    assert!(!yaml.trim_start().starts_with('['));

    let back: Vec<ProfileRecord> = load_records(&yaml_path).unwrap();
    assert_eq!(back, characters);
}

#[test]
fn test_write_dataset_creates_json_and_yaml() {
    let tmp = tmp_dir();
    let dir = tmp.path().join("nested").join("out");
    let characters: Vec<ProfileRecord> = serde_json::from_str(CHARACTERS_JSON).unwrap();

    let (json_path, yaml_path) =
        write_dataset(&dir, "biccame_characters", "20250101_120000", &characters).unwrap();

    assert_eq!(
        json_path.file_name().unwrap(),
        "biccame_characters_20250101_120000.json"
    );
    assert!(json_path.exists());
    assert!(yaml_path.exists());
    assert_eq!(files_with(&dir, "biccame_characters_", ".tmp").len(), 0);

    let back: Vec<ProfileRecord> = load_records(&yaml_path).unwrap();
    assert_eq!(back, characters);
}

#[test]
fn test_write_dataset_failure_leaves_no_files() {
    let tmp = tmp_dir();
    let dir = tmp.path();
    // a directory squatting on the YAML name makes the second rename fail
    fs::create_dir(dir.join("biccame_characters_20250101_120000.yaml")).unwrap();
    let characters = vec![profile(Some("mito"), "水戸")];

    let res = write_dataset(dir, "biccame_characters", "20250101_120000", &characters);

    assert!(res.is_err());
    assert!(!dir.join("biccame_characters_20250101_120000.json").exists());
    assert_eq!(files_with(dir, "biccame_characters_", ".tmp").len(), 0);
}

#[test]
fn test_write_files_staging_failure_cleans_up() {
    let tmp = tmp_dir();
    let first = tmp.path().join("first.json");
    let second = tmp.path().join("second.json");
    fs::create_dir(tmp.path().join("second.json.tmp")).unwrap();

    let res = write_files(&[(first.as_path(), "{}\n"), (second.as_path(), "{}\n")]);

    assert!(res.is_err());
    assert!(!first.exists());
    assert!(!second.exists());
    assert!(!tmp.path().join("first.json.tmp").exists());
}

#[test]
fn test_load_missing_file_fails() {
    let tmp = tmp_dir();
    let res: Result<Vec<ProfileRecord>, _> = load_records(&tmp.path().join("nope.json"));
    assert!(res.is_err());
}

#[test]
fn test_load_invalid_json_fails() {
    let tmp = tmp_dir();
    let bad = write_fixture(tmp.path(), "bad.json", "[{\"character_name\": ");
    let res: Result<Vec<ProfileRecord>, _> = load_records(&bad);
    assert!(res.is_err());
}
