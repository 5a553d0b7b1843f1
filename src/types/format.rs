//! Colour literal formats.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ContrastError, Result};

/// The textual format a colour literal is written in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rgb` or `#rrggbb`, the `#` being optional
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl Format {
    /// Every supported format, in display order.
    pub const ALL: [Format; 4] = [Format::Hex, Format::Rgb, Format::Rgba, Format::Hsl];

    /// Lowercase name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
        }
    }

    /// Example literal shown to users as input guidance.
    pub fn placeholder(self) -> &'static str {
        match self {
            Format::Hex => "#ffffff",
            Format::Rgb => "rgb(255, 255, 255)",
            Format::Rgba => "rgba(255, 255, 255, 1.0)",
            Format::Hsl => "hsl(0, 0%, 100%)",
        }
    }
}

impl FromStr for Format {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContrastError::Parse {
                message: format!("Unknown colour format: {}", s),
                help: Some("Use one of: hex, rgb, rgba, hsl".to_string()),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
