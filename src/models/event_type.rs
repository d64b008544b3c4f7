use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CharacterBirthday,
    StoreBirthday,
    Other,
}

impl EventType {
    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::CharacterBirthday => "character_birthday",
            EventType::StoreBirthday => "store_birthday",
            EventType::Other => "other",
        }
    }

    /// Classify a calendar link text.
    /// "擬人化" (personification day) marks a character birthday,
    /// "店舗" (store) marks a store anniversary.
    pub fn from_event_text(text: &str) -> Self {
        if text.contains("擬人化") {
            EventType::CharacterBirthday
        } else if text.contains("店舗") {
            EventType::StoreBirthday
        } else {
            EventType::Other
        }
    }

    /// Whether events of this type carry an anniversary count.
    pub fn has_years(&self) -> bool {
        !matches!(self, EventType::Other)
    }

    pub fn is_character_birthday(&self) -> bool {
        matches!(self, EventType::CharacterBirthday)
    }
}
