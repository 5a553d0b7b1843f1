//! Configuration (contrast.yaml) parsing.
//!
//! The config file only supplies defaults for the command line: the format
//! literals are validated in and the colour pair `check` uses when none is
//! given. The library functions never read it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContrastError, Result};
use crate::types::Format;

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "contrast.yaml";

/// Defaults loaded from contrast.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format literals are validated in when `--format` is not given.
    pub format: Format,

    /// Foreground (text) colour for `check`.
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Background colour for `check`.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_foreground() -> String {
    "#000000".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::default(),
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

impl Config {
    /// Load config from a contrast.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ContrastError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ContrastError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `dir/contrast.yaml` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render as YAML, as written by `contrast init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ContrastError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
