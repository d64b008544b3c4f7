use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize;
use crate::errors::AppResult;
use crate::export::{load_value, write_dataset};
use crate::utils::date::file_timestamp;
use std::path::Path;

/// Handle the `normalize` command: 全角 → 半角 over the whole document,
/// saved as `biccame_characters_final_<ts>.json/.yaml`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Normalize { input } = cmd {
        let data = load_value(Path::new(input))?;
        let converted = normalize(data);

        write_dataset(
            &cfg.output_path(),
            "biccame_characters_final",
            &file_timestamp(),
            &converted,
        )?;
    }
    Ok(())
}
