mod common;
use common::{birthday_event, profile};
use rbiccame::core::{dedup_events, derive_birth_date, reconcile};
use rbiccame::models::{CalendarEvent, EventType, ProfileRecord};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_birthday_added_from_anniversary() {
    let events = vec![birthday_event("2025-05-01", "mito", Some(5))];
    let profiles = vec![profile(Some("mito"), "Mito")];

    let summary = reconcile(&events, profiles);

    assert_eq!(summary.profiles.len(), 1);
    let mito = &summary.profiles[0];
    assert_eq!(mito.key(), Some("mito"));
    assert_eq!(mito.character_name(), Some("Mito"));
    assert_eq!(mito.character_birthday(), Some("2020-05-01"));
    assert_eq!(summary.assigned.len(), 1);
    assert_eq!(summary.with_birthday(), 1);
}

#[test]
fn test_derive_without_years_keeps_event_date() {
    let e = birthday_event("2025-05-01", "mito", None);
    assert_eq!(derive_birth_date(&e).as_deref(), Some("2025-05-01"));
}

#[test]
fn test_derive_copies_suffix_without_validation() {
    let e = birthday_event("2024-02-29", "leap", Some(1));
    assert_eq!(derive_birth_date(&e).as_deref(), Some("2023-02-29"));

    let e = birthday_event("2025-03-10", "x", Some(5));
    assert_eq!(derive_birth_date(&e).as_deref(), Some("2020-03-10"));
}

#[test]
fn test_derive_only_for_character_birthdays() {
    let store = CalendarEvent::new("2025-05-02", Some("kashiwa"), "店舗誕生", EventType::StoreBirthday)
        .with_years(15);
    let other = CalendarEvent::new("2025-05-03", Some("x"), "イベント", EventType::Other);

    assert_eq!(derive_birth_date(&store), None);
    assert_eq!(derive_birth_date(&other), None);
}

#[test]
fn test_derive_bad_date_is_skipped() {
    assert_eq!(derive_birth_date(&birthday_event("abc", "x", Some(1))), None);
    assert_eq!(derive_birth_date(&birthday_event("20xx-01-01", "x", Some(1))), None);
}

#[test]
fn test_duplicate_profile_key_last_wins() {
    let mut p1 = profile(Some("a"), "First");
    p1.set_str("description", "old");
    let p2 = profile(Some("a"), "Second");
    let b = profile(Some("b"), "Other");

    let summary = reconcile(&[], vec![p1, b, p2]);

    assert_eq!(summary.profiles.len(), 2);
    // the later record takes the earlier record's place
    assert_eq!(summary.profiles[0].character_name(), Some("Second"));
    assert_eq!(summary.profiles[0].get("description"), None);
    assert_eq!(summary.profiles[1].character_name(), Some("Other"));
    assert!(summary.profiles.iter().all(|p| p.character_name() != Some("First")));
}

#[test]
fn test_keyless_profile_passes_through() {
    let keyless = profile(None, "ナイセン");
    let events = vec![birthday_event("2025-05-01", "mito", Some(5))];

    let summary = reconcile(&events, vec![keyless.clone(), profile(Some("mito"), "Mito")]);

    // keyed records first, keyless after
    assert_eq!(summary.profiles.len(), 2);
    assert_eq!(summary.profiles[0].character_name(), Some("Mito"));
    assert_eq!(summary.profiles[1], keyless);
}

#[test]
fn test_last_birthday_event_wins() {
    let events = vec![
        birthday_event("2025-05-01", "mito", Some(5)),
        birthday_event("2025-07-01", "mito", Some(2)),
    ];

    let summary = reconcile(&events, vec![profile(Some("mito"), "Mito")]);

    assert_eq!(
        summary.profiles[0].character_birthday(),
        Some("2023-07-01")
    );
}

#[test]
fn test_unusable_events_are_skipped() {
    let mut keyless_event = birthday_event("2025-05-01", "mito", Some(1));
    keyless_event.key = None;

    let events = vec![
        keyless_event,
        birthday_event("2025-05-01", "nobody", Some(3)),
        CalendarEvent::new("2025-05-02", Some("mito"), "店舗誕生", EventType::StoreBirthday)
            .with_years(10),
        birthday_event("bad", "mito", Some(1)),
    ];

    let summary = reconcile(&events, vec![profile(Some("mito"), "Mito")]);

    assert_eq!(summary.profiles.len(), 1);
    assert_eq!(summary.profiles[0].character_birthday(), None);
    assert!(summary.assigned.is_empty());
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    let mut first = birthday_event("2025-05-01", "mito", Some(5));
    first.event_text = "first".into();
    let mut second = first.clone();
    second.event_text = "second".into();
    let other_type = CalendarEvent::new("2025-05-01", Some("mito"), "x", EventType::Other);

    let out = dedup_events(&[first, second, other_type]);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].event_text, "first");
    assert_eq!(out[1].event_type, EventType::Other);
}

#[test]
fn test_dedup_applies_before_birthday_assignment() {
    // same triple, different years: only the first one counts
    let events = vec![
        birthday_event("2025-05-01", "mito", Some(5)),
        birthday_event("2025-05-01", "mito", Some(9)),
    ];

    let summary = reconcile(&events, vec![profile(Some("mito"), "Mito")]);
    assert_eq!(
        summary.profiles[0].character_birthday(),
        Some("2020-05-01")
    );
}

#[test]
fn test_output_size_bounds() {
    let profiles = vec![
        profile(Some("a"), "A1"),
        profile(Some("b"), "B"),
        profile(Some("a"), "A2"),
        profile(None, "K1"),
        profile(None, "K2"),
        profile(Some("c"), "C"),
    ];
    let distinct: HashSet<_> = profiles.iter().filter_map(|p| p.key().map(str::to_string)).collect();
    let total = profiles.len();

    let summary = reconcile(&[], profiles);

    assert!(summary.total() >= distinct.len());
    assert!(summary.total() <= total);
    assert_eq!(summary.total(), 5);
}

#[test]
fn test_reconcile_is_idempotent() {
    let events = vec![
        birthday_event("2025-05-01", "mito", Some(5)),
        birthday_event("2025-08-12", "kashiwa", None),
    ];
    let profiles = vec![
        profile(None, "ナイセン"),
        profile(Some("mito"), "Mito"),
        profile(Some("kashiwa"), "Kashiwa"),
        profile(Some("mito"), "Mito 2"),
    ];

    let once = reconcile(&events, profiles).profiles;
    let twice = reconcile(&[], once.clone()).profiles;

    assert_eq!(once, twice);
}

#[test]
fn test_records_pass_through_verbatim() {
    let profiles: Vec<ProfileRecord> = serde_json::from_value(json!([
        {"character_name": "A", "store_name": null, "description": null, "zipcode": 1000001},
        {"key": "x", "store_name": "s"}
    ]))
    .unwrap();
    let events = vec![birthday_event("2025-05-01", "x", Some(5))];

    let summary = reconcile(&events, profiles);

    let out: Vec<String> = summary
        .profiles
        .iter()
        .map(|p| serde_json::to_string(p).unwrap())
        .collect();
    assert_eq!(
        out,
        vec![
            r#"{"key":"x","store_name":"s","character_birthday":"2020-05-01"}"#,
            r#"{"character_name":"A","store_name":null,"description":null,"zipcode":1000001}"#,
        ]
    );
    assert_eq!(summary.assigned[0].character_name, "unknown");
}

#[test]
fn test_null_and_non_string_keys_are_keyless() {
    let profiles: Vec<ProfileRecord> = serde_json::from_value(json!([
        {"character_name": "N1", "key": null},
        {"character_name": "N2", "key": null},
        {"character_name": "Num", "key": 7}
    ]))
    .unwrap();

    let summary = reconcile(&[], profiles);

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.profiles[0].character_name(), Some("N1"));
    assert_eq!(summary.profiles[2].get("key"), Some(&json!(7)));
}
