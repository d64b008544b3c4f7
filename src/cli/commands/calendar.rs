use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::MergeSummary;
use crate::core::reconcile;
use crate::errors::AppResult;
use crate::export::{load_records, write_dataset};
use crate::models::{CalendarEvent, ProfileRecord};
use crate::scrape::{CalendarParser, Fetcher, fetch_year};
use crate::ui::messages::{header, info, item, warning};
use crate::utils::date::file_timestamp;
use crate::utils::path::latest_matching;
use crate::utils::table::{Column, Table};
use std::path::PathBuf;

/// Handle the `calendar` command
///
/// 1. fetch the twelve monthly pages and save the deduplicated events
/// 2. merge the character birthdays into the chosen (or newest) character file
/// 3. print what was found
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { year, profiles } = cmd {
        let year = year.unwrap_or(cfg.calendar_year);
        let dir = cfg.output_path();

        info(format!("Fetching all events for {year}..."));
        let fetcher = Fetcher::new(cfg);
        let parser = CalendarParser::new(cfg)?;
        let events = fetch_year(&fetcher, &parser, year);
        info(format!("Total events found: {}", events.len()));

        let ts = file_timestamp();
        write_dataset(&dir, &format!("biccame_calendar_{year}"), &ts, &events)?;

        // ---- MERGE ----
        let profile_file: Option<PathBuf> = match profiles {
            Some(p) => Some(PathBuf::from(p)),
            None => latest_matching(&dir, "biccame_characters_", "json")?,
        };

        match profile_file {
            Some(path) => {
                info(format!("Merging with profile data from {}...", path.display()));
                let characters: Vec<ProfileRecord> = load_records(&path)?;
                let summary = reconcile(&events, characters);
                write_dataset(&dir, "biccame_characters_merged", &ts, &summary.profiles)?;
                print_birthdays(&summary);
            }
            None => warning("No profile data found to merge"),
        }

        print_events(year, &events);
    }
    Ok(())
}

fn print_birthdays(summary: &MergeSummary) {
    header("Characters with birthday");

    let mut table = Table::new(vec![Column::new("character"), Column::new("birthday")]);
    for p in &summary.profiles {
        if let Some(b) = p.character_birthday() {
            table.add_row(vec![p.display_name().to_string(), b.to_string()]);
        }
    }
    print!("{}", table.render());

    info(format!(
        "{} of {} characters have a birthday",
        summary.with_birthday(),
        summary.total()
    ));
}

fn print_events(year: i32, events: &[CalendarEvent]) {
    header(format!("All events in {year}"));
    for e in events {
        item(format!(
            "{}: {} ({})",
            e.date,
            e.event_text,
            e.event_type.et_as_str()
        ));
    }
}
