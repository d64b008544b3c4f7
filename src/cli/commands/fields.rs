use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fields::extract_character_fields;
use crate::errors::AppResult;
use crate::export::{load_records, write_yaml};
use crate::models::ProfileRecord;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Fields { input, output } = cmd {
        let characters: Vec<ProfileRecord> = load_records(Path::new(input))?;
        let fields = extract_character_fields(&characters)?;

        write_yaml(Path::new(output), &fields)?;
        success(format!("Extracted {} characters", fields.len()));
    }
    Ok(())
}
