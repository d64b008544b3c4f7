use super::event_type::EventType;
use serde::{Deserialize, Serialize};

/// One entry scraped from a monthly calendar page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: String, // "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub event_text: String,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Identity of a calendar event: two events with the same triple are the same fact.
pub type EventIdentity = (String, Option<String>, EventType);

impl CalendarEvent {
    pub fn new(date: &str, key: Option<&str>, event_text: &str, event_type: EventType) -> Self {
        Self {
            date: date.to_string(),
            key: key.map(str::to_string),
            event_text: event_text.to_string(),
            event_type,
            years: None,
            image_url: None,
        }
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years = Some(years);
        self
    }

    pub fn identity(&self) -> EventIdentity {
        (self.date.clone(), self.key.clone(), self.event_type)
    }
}
