use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::to_yaml_string;
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            if Config::init_at(path)? {
                success(format!("Config file created: {}", path.display()));
            } else {
                info(format!("Config file already exists: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", to_yaml_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::init_at(path)?;
            }
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in the requested editor, falling back to the platform default.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    match Command::new(&editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited successfully using '{editor}'"));
            return Ok(());
        }
        _ => warning(format!(
            "Editor '{editor}' not available, falling back to '{fallback}'"
        )),
    }

    match Command::new(&fallback).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{fallback}'"
            ));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using fallback '{fallback}'"
        ))),
    }
}
