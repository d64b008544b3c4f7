//! Character flags and per-character field extraction.

use crate::errors::AppResult;
use crate::models::ProfileRecord;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Counters reported after flagging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagCounts {
    pub total: usize,
    pub musume: usize,
    pub excluded: usize,
}

/// Mark every profile as a Biccame musume unless its key is in `excluded_keys`.
/// Keyless profiles count as musume.
pub fn apply_musume_flag(profiles: &mut [ProfileRecord], excluded_keys: &[String]) -> FlagCounts {
    let mut counts = FlagCounts {
        total: profiles.len(),
        ..Default::default()
    };

    for p in profiles.iter_mut() {
        let is_excluded = p
            .key()
            .is_some_and(|k| excluded_keys.iter().any(|e| e == k));

        p.set_is_biccame_musume(!is_excluded);

        if is_excluded {
            counts.excluded += 1;
        } else {
            counts.musume += 1;
        }
    }

    counts
}

#[derive(Debug, Serialize)]
struct CharacterFieldValues<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_biccame_musume: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CharacterFields<'a> {
    character: CharacterFieldValues<'a>,
}

/// Build `key → { character: { birthday, is_biccame_musume } }` in profile order.
/// Profiles without a key are skipped.
pub fn extract_character_fields(profiles: &[ProfileRecord]) -> AppResult<Mapping> {
    let mut out = Mapping::new();

    for p in profiles {
        let Some(key) = p.key() else {
            continue;
        };

        let fields = CharacterFields {
            character: CharacterFieldValues {
                birthday: p.character_birthday(),
                is_biccame_musume: p.is_biccame_musume(),
            },
        };

        out.insert(Value::String(key.to_string()), serde_yaml::to_value(&fields)?);
    }

    Ok(out)
}
