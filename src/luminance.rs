//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Inputs here are format-agnostic: `detect_format` guesses the format from
//! the shape of the literal and `resolve_rgb` reads it leniently. This is the
//! only place that accepts more than the strict grammar does.

use std::fmt;

use serde::Serialize;

use crate::types::{hsl_to_rgb, Format, Rgb};

/// Returned by `calculate_contrast_ratio` when either colour cannot be read.
pub const RATIO_FALLBACK: &str = "1:1";

/// Contrast between two colours, in `[1, 21]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ContrastRatio(f64);

impl ContrastRatio {
    /// Identical colours.
    pub const MIN: Self = Self(1.0);

    /// Black against white.
    pub const MAX: Self = Self(21.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.0)
    }
}

/// Relative luminance per WCAG 2.1 (G17).
///
/// Channels are linearized with the 0.03928 breakpoint and weighted
/// `0.2126 R + 0.7152 G + 0.0722 B`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio `(L1 + 0.05) / (L2 + 0.05)` where `L1` is the lighter colour.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> ContrastRatio {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    ContrastRatio((lighter + 0.05) / (darker + 0.05))
}

/// Guess the format of a literal from its shape.
///
/// A bare 3- or 6-digit hex string counts as hex without the `#`, and
/// `hsla(...)` is read as HSL.
pub fn detect_format(literal: &str) -> Option<Format> {
    if literal.starts_with('#') {
        Some(Format::Hex)
    } else if literal.starts_with("rgba") {
        Some(Format::Rgba)
    } else if literal.starts_with("rgb") {
        Some(Format::Rgb)
    } else if literal.starts_with("hsl") {
        Some(Format::Hsl)
    } else if matches!(literal.len(), 3 | 6) && literal.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(Format::Hex)
    } else {
        None
    }
}

/// Read any supported literal into RGB without enforcing the strict grammar.
///
/// RGB(A) takes the first three numbers (fractions truncated, each must fit
/// `0..=255`). HSL takes the first three numbers; a saturation or lightness
/// written without `%` is a fraction of 1.
pub fn resolve_rgb(literal: &str) -> Option<Rgb> {
    match detect_format(literal)? {
        Format::Hex => Rgb::from_hex(literal).ok(),
        Format::Rgb | Format::Rgba => {
            let numbers = numbers(literal);
            let [r, g, b] = first_three(&numbers)?;
            Some(Rgb::new(byte(r.value)?, byte(g.value)?, byte(b.value)?))
        }
        Format::Hsl => {
            let numbers = numbers(literal);
            let [h, s, l] = first_three(&numbers)?;
            Some(hsl_to_rgb(h.value, s.as_percent(), l.as_percent()))
        }
    }
}

/// Format the contrast between two literals of any format as `"4.50:1"`.
///
/// Returns `"1:1"` if either literal cannot be read.
pub fn calculate_contrast_ratio(a: &str, b: &str) -> String {
    match (resolve_rgb(a), resolve_rgb(b)) {
        (Some(a), Some(b)) => contrast_ratio(a, b).to_string(),
        _ => RATIO_FALLBACK.to_string(),
    }
}

/// An unsigned number found in a literal, with an optional trailing `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Number {
    value: f64,
    percent: bool,
}

impl Number {
    fn as_percent(self) -> f64 {
        if self.percent {
            self.value
        } else {
            self.value * 100.0
        }
    }
}

/// Every `d+(.d+)?%?` in `s`, left to right.
fn numbers(s: &str) -> Vec<Number> {
    let bytes = s.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        let value = s[start..i].parse().unwrap_or(0.0);
        let percent = bytes.get(i) == Some(&b'%');
        if percent {
            i += 1;
        }
        found.push(Number { value, percent });
    }

    found
}

fn first_three(numbers: &[Number]) -> Option<[Number; 3]> {
    match numbers {
        [a, b, c, ..] => Some([*a, *b, *c]),
        _ => None,
    }
}

fn byte(value: f64) -> Option<u8> {
    let whole = value.trunc();
    (whole <= 255.0).then_some(whole as u8)
}
