use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fields::apply_musume_flag;
use crate::errors::AppResult;
use crate::export::{load_records, write_records};
use crate::models::ProfileRecord;
use crate::ui::messages::info;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Flag { input, output } = cmd {
        let mut characters: Vec<ProfileRecord> = load_records(Path::new(input))?;

        let counts = apply_musume_flag(&mut characters, &cfg.excluded_keys);

        let target = output.as_deref().unwrap_or(input);
        write_records(Path::new(target), &characters)?;

        info(format!("Excluded characters: {}", cfg.excluded_keys.join(", ")));
        info(format!("Total characters: {}", counts.total));
        info(format!("Biccame musume: {}", counts.musume));
        info(format!("Excluded: {}", counts.excluded));
    }
    Ok(())
}
