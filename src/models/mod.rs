pub mod calendar_event;
pub mod event_type;
pub mod profile;

pub use calendar_event::CalendarEvent;
pub use event_type::EventType;
pub use profile::{ProfileDetail, ProfileRecord};
