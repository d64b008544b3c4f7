use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile;
use crate::errors::AppResult;
use crate::export::{load_records, write_records};
use crate::models::{CalendarEvent, ProfileRecord};
use crate::ui::messages::{info, item};
use std::path::Path;

/// Handle the `merge` command
///
/// Loads calendar events and characters, joins the character birthdays by
/// key and writes the merged list. Nothing is written if either input fails
/// to load.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Merge {
        calendar_file,
        characters_file,
        output_file,
    } = cmd
    {
        let events: Vec<CalendarEvent> = load_records(Path::new(calendar_file))?;
        let characters: Vec<ProfileRecord> = load_records(Path::new(characters_file))?;

        info(format!(
            "Merging {} calendar events into {} characters",
            events.len(),
            characters.len()
        ));

        let summary = reconcile(&events, characters);

        for a in &summary.assigned {
            item(format!("Added birthday for {}: {}", a.character_name, a.birth_date));
        }

        write_records(Path::new(output_file), &summary.profiles)?;

        info(format!("Total characters: {}", summary.total()));
        info(format!("Characters with birthday: {}", summary.with_birthday()));
    }
    Ok(())
}
