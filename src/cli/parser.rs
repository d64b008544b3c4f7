use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rBiccame
/// CLI application to scrape and merge Biccame musume character data
#[derive(Parser)]
#[command(
    name = "rbiccame",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrape Biccame musume profiles and calendar events, and merge them into one character dataset",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the output directory for generated files
    #[arg(global = true, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge calendar birthdays into a character file
    Merge {
        /// Calendar events file (JSON or YAML)
        calendar_file: String,

        /// Characters file (JSON or YAML)
        characters_file: String,

        /// Output file (.yaml/.yml writes YAML, anything else JSON)
        output_file: String,
    },

    /// Scrape the profile index (and detail pages) into a character file
    Profiles {
        #[arg(long = "no-details", help = "Skip the per-character detail pages")]
        no_details: bool,

        #[arg(long = "save-html", help = "Also save the raw profile index HTML")]
        save_html: bool,
    },

    /// Scrape a year of calendar events and merge birthdays into the latest character file
    Calendar {
        #[arg(long, short = 'y', help = "Calendar year (default: from configuration)")]
        year: Option<i32>,

        #[arg(
            long = "profiles",
            value_name = "FILE",
            help = "Character file to merge with (default: newest biccame_characters_*.json)"
        )]
        profiles: Option<String>,
    },

    /// Convert full-width characters to half-width in a JSON/YAML file
    Normalize {
        /// Input file (JSON or YAML)
        input: String,
    },

    /// Set the is_biccame_musume flag on every character
    Flag {
        /// Characters file (JSON or YAML)
        input: String,

        #[arg(long, value_name = "FILE", help = "Write here instead of overwriting the input")]
        output: Option<String>,
    },

    /// Extract per-character birthday and flag fields to YAML
    Fields {
        /// Characters file (JSON or YAML)
        input: String,

        /// Output YAML file
        output: String,
    },

    /// Manage the configuration file (view, edit or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Create the configuration file with default values")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
