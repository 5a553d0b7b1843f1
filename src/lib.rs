//! contrast - WCAG 2.1 colour contrast engine
//!
//! Validates colour literals in hex, RGB, RGBA and HSL notation, converts
//! between them, and computes the WCAG relative-luminance contrast ratio of
//! two colours along with its compliance tier.
//!
//! The functions at the crate root are the surface a front end consumes.
//! None of them panic: conversion and contrast fall back to black and `1:1`
//! respectively when handed input that skipped validation.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod grammar;
pub mod luminance;
pub mod output;
pub mod rating;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{ContrastError, Result};
pub use grammar::{Diagnostic, Severity, ValidationResult};
pub use luminance::{
    contrast_ratio, detect_format, relative_luminance, resolve_rgb, ContrastRatio,
};
pub use rating::{classify, classify_ratio, Rating, Tier};
pub use types::{Alpha, Format, Hsl, Rgb};

/// Whether `literal` is a valid colour in `format`.
pub fn is_valid_color(literal: &str, format: Format) -> bool {
    grammar::is_valid(literal, format)
}

/// Normalize a literal to hex (`#rrggbb`, or hex input passed through).
pub fn to_hex_format(literal: &str, format: Format) -> String {
    convert::to_hex(literal, format)
}

/// Render a hex colour in `format`.
pub fn from_hex_to_format(hex: &str, format: Format) -> String {
    convert::from_hex(hex, format)
}

/// Contrast ratio of two literals in any format, e.g. `"4.50:1"`.
pub fn calculate_contrast_ratio(a: &str, b: &str) -> String {
    luminance::calculate_contrast_ratio(a, b)
}

/// Example literal for `format`.
pub fn format_placeholder(format: Format) -> &'static str {
    format.placeholder()
}
