//! Core value types.
//!
//! This module contains the values the engine passes around:
//! - `Format` - which textual format a literal is written in
//! - `Rgb` - 8-bit sRGB triple, the canonical intermediate
//! - `Hsl` - hue/saturation/lightness triple
//! - `Alpha` - opacity of RGBA literals

mod alpha;
mod format;
mod hsl;
mod rgb;

pub use alpha::Alpha;
pub use format::Format;
pub use hsl::{hsl_to_rgb, Hsl};
pub use rgb::Rgb;
