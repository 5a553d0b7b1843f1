//! Alpha channel of RGBA literals.

use std::fmt;

use serde::Serialize;

/// Opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Alpha(f64);

impl Alpha {
    /// Fully opaque. Used whenever a format without alpha is converted to RGBA.
    pub const OPAQUE: Self = Self(1.0);

    /// Returns `None` when `value` lies outside `[0, 1]` (or is NaN).
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
