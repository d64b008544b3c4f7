use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{notify_export_success, write_dataset, write_file};
use crate::scrape::{Fetcher, ProfileParser, fetch_profiles};
use crate::ui::messages::info;
use crate::utils::date::file_timestamp;
use crate::utils::path::timestamped;

/// Handle the `profiles` command
///
/// Scrapes the profile index (plus each detail page unless `--no-details`)
/// and saves `biccame_characters_<ts>.json/.yaml` in the output directory.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profiles {
        no_details,
        save_html,
    } = cmd
    {
        let fetcher = Fetcher::new(cfg);
        let parser = ProfileParser::new(cfg)?;

        let (html, characters) = fetch_profiles(&fetcher, &parser, !*no_details)?;

        let dir = cfg.output_path();
        let ts = file_timestamp();
        write_dataset(&dir, "biccame_characters", &ts, &characters)?;

        if *save_html {
            let html_path = timestamped(&dir, "biccame_profile", &ts, "html");
            write_file(&html_path, &html)?;
            notify_export_success("HTML", &html_path);
        }

        info(format!("Total characters: {}", characters.len()));
    }
    Ok(())
}
