use crate::models::CalendarEvent;
use tracing::warn;

/// Back-compute a character's original date from a "personification day" event.
///
/// The year is the event year minus the anniversary count (missing count = 0);
/// the rest of the date string (`-MM-DD`) is copied verbatim, without any
/// calendar validation.
///
/// Returns `None` for events that are not character birthdays, and for dates
/// whose first four characters are not a year.
pub fn derive_birth_date(event: &CalendarEvent) -> Option<String> {
    if !event.event_type.is_character_birthday() {
        return None;
    }

    let (year_part, suffix) = match (event.date.get(..4), event.date.get(4..)) {
        (Some(y), Some(s)) => (y, s),
        _ => {
            warn!(date = %event.date, "calendar event date too short, birthday skipped");
            return None;
        }
    };

    let event_year: i64 = match year_part.parse() {
        Ok(y) => y,
        Err(_) => {
            warn!(date = %event.date, "calendar event date has no year, birthday skipped");
            return None;
        }
    };

    let birth_year = event_year - i64::from(event.years.unwrap_or(0));
    Some(format!("{birth_year}{suffix}"))
}
