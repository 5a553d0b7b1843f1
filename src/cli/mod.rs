pub mod check;
pub mod completions;
pub mod convert;
pub mod init;
pub mod placeholder;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// contrast - WCAG 2.1 colour contrast checker
#[derive(Parser, Debug)]
#[command(name = "contrast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./contrast.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the contrast ratio between a foreground and background colour
    Check(check::CheckArgs),

    /// Convert a colour literal to another format
    Convert(convert::ConvertArgs),

    /// Validate a colour literal against a format
    Validate(validate::ValidateArgs),

    /// Print example literals for each format
    Placeholder(placeholder::PlaceholderArgs),

    /// Initialize a contrast.yaml config file
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the config named by `--config`, or discover one in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}
