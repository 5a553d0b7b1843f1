//! RGB triple, the canonical intermediate every format converts through.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ContrastError, Result};
use crate::grammar;

use super::Hsl;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, also the fallback for anything that cannot be read.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        grammar::parse_hex(s).map_err(ContrastError::from)
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL with whole-number hue, saturation and lightness.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let max_channel = self.r.max(self.g).max(self.b);
        let min_channel = self.r.min(self.g).min(self.b);

        // Achromatic
        if max_channel == min_channel {
            return Hsl::new(0, 0, round_percent(l));
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max_channel == self.r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max_channel == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let h = (sector * 60.0).round().rem_euclid(360.0) as u16;

        Hsl::new(h, round_percent(s), round_percent(l))
    }
}

/// Scale a `[0, 1]` fraction to a whole percentage.
fn round_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

impl FromStr for Rgb {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
