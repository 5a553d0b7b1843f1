//! Init command implementation.
//!
//! Writes a `contrast.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{ContrastError, Result};
use crate::output::{display_path, Printer};
use crate::types::Format;

/// Initialize a contrast.yaml config file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Default input format to record
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Overwrite existing contrast.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    // Check for existing config
    if config_path.exists() && !args.force {
        return Err(ContrastError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = Config {
        format: args.format.unwrap_or_default(),
        ..Config::default()
    };

    fs::write(&config_path, config.to_yaml()?).map_err(|e| ContrastError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_args(path: PathBuf, format: Option<Format>, force: bool) -> InitArgs {
        InitArgs { path, format, force }
    }

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();

        run(init_args(dir.path().to_path_buf(), None, false), &Printer::new()).unwrap();

        let config_path = dir.path().join(CONFIG_FILENAME);
        assert!(config_path.exists());

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_records_format() {
        let dir = tempdir().unwrap();

        run(init_args(dir.path().to_path_buf(), Some(Format::Hsl), false), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("format: hsl"));
    }

    #[test]
    fn test_init_errors_if_config_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: rgb").unwrap();

        let result = run(init_args(dir.path().to_path_buf(), None, false), &Printer::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: rgb").unwrap();

        run(init_args(dir.path().to_path_buf(), None, true), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("format: hex"));
    }
}
