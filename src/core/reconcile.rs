//! Merge calendar-derived birthdays into profile records.

use crate::core::birthday::derive_birth_date;
use crate::models::{CalendarEvent, ProfileRecord};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Drop events that repeat an earlier `(date, key, event_type)` triple.
/// The first occurrence is kept and input order is preserved.
pub fn dedup_events(events: &[CalendarEvent]) -> Vec<CalendarEvent> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|e| seen.insert(e.identity()))
        .cloned()
        .collect()
}

/// Birthday assigned to one character during a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedBirthday {
    pub character_name: String,
    pub birth_date: String,
}

/// Outcome of a merge: the reconciled records plus what changed.
#[derive(Debug, Clone, Default)]
pub struct MergeSummary {
    pub profiles: Vec<ProfileRecord>,
    pub assigned: Vec<AssignedBirthday>,
}

impl MergeSummary {
    pub fn total(&self) -> usize {
        self.profiles.len()
    }

    pub fn with_birthday(&self) -> usize {
        self.profiles
            .iter()
            .filter(|p| p.character_birthday().is_some())
            .count()
    }
}

/// Key → profile table keeping first-insertion order.
/// Inserting an existing key replaces the record in place (last write wins).
#[derive(Default)]
struct KeyedProfiles {
    index: HashMap<String, usize>,
    slots: Vec<ProfileRecord>,
}

impl KeyedProfiles {
    fn insert(&mut self, key: String, profile: ProfileRecord) {
        match self.index.get(&key) {
            Some(&pos) => {
                debug!(key = %key, "duplicate profile key, later record replaces earlier one");
                self.slots[pos] = profile;
            }
            None => {
                self.index.insert(key, self.slots.len());
                self.slots.push(profile);
            }
        }
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut ProfileRecord> {
        let pos = *self.index.get(key)?;
        self.slots.get_mut(pos)
    }
}

/// Join character birthdays from `events` onto `profiles` by key.
///
/// Output order: keyed profiles in first-seen key order, then keyless
/// profiles in input order. A profile whose key is reused by a later
/// profile is replaced by it. A missing, null or non-string key counts as
/// keyless; keyless profiles pass through untouched. Events with no key,
/// an unknown key or an unusable date are skipped.
pub fn reconcile(events: &[CalendarEvent], profiles: Vec<ProfileRecord>) -> MergeSummary {
    let events = dedup_events(events);

    let mut keyed = KeyedProfiles::default();
    let mut keyless = Vec::new();

    for profile in profiles {
        let key = profile.key().map(str::to_string);
        match key {
            Some(key) => keyed.insert(key, profile),
            None => keyless.push(profile),
        }
    }

    let mut assigned = Vec::new();

    for event in events.iter().filter(|e| e.event_type.is_character_birthday()) {
        let Some(key) = event.key.as_deref() else {
            continue;
        };
        let Some(profile) = keyed.get_mut(key) else {
            debug!(key, date = %event.date, "birthday event has no matching profile");
            continue;
        };
        let Some(birth_date) = derive_birth_date(event) else {
            continue;
        };

        profile.set_character_birthday(&birth_date);
        assigned.push(AssignedBirthday {
            character_name: profile.display_name().to_string(),
            birth_date,
        });
    }

    // Every keyed record lives in a slot, so only keyless ones are left over.
    let mut out = keyed.slots;
    out.extend(keyless);

    MergeSummary {
        profiles: out,
        assigned,
    }
}
