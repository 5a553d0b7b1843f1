//! Check command implementation.
//!
//! Reads a foreground and background colour in any format, prints their
//! contrast ratio and WCAG rating.

use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::error::{ContrastError, Result};
use crate::grammar;
use crate::luminance::detect_format;
use crate::output::Printer;
use crate::rating::{classify, Rating};
use crate::types::Format;
use crate::{calculate_contrast_ratio, to_hex_format};

/// Check the contrast ratio between two colours
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Foreground (text) colour in any format (default: from config)
    pub foreground: Option<String>,

    /// Background colour in any format (default: from config)
    pub background: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of checking one colour pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub foreground: String,
    pub background: String,
    pub foreground_hex: String,
    pub background_hex: String,
    pub ratio: String,
    #[serde(flatten)]
    pub rating: Rating,
}

pub fn run(args: CheckArgs, config: &Config, printer: &Printer) -> Result<()> {
    let foreground = args.foreground.unwrap_or_else(|| config.foreground.clone());
    let background = args.background.unwrap_or_else(|| config.background.clone());

    printer.status("Checking", &format!("{} on {}", foreground, background));
    let report = report(&foreground, &background)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| ContrastError::Output {
            message: format!("Failed to serialize report: {}", e),
        })?;
        println!("{}", json);
    } else {
        println!("{}", render_report(&report));
    }

    if report.rating.tier.passes() {
        printer.success("Passed", report.rating.tier.label());
    } else {
        printer.warning("Failed", report.rating.description);
    }

    Ok(())
}

/// Build the report for a colour pair, rejecting literals that do not
/// match the grammar of their detected format.
pub fn report(foreground: &str, background: &str) -> Result<CheckReport> {
    let fg_format = readable_format(foreground)?;
    let bg_format = readable_format(background)?;

    let ratio = calculate_contrast_ratio(foreground, background);
    let rating = classify(&ratio);

    Ok(CheckReport {
        foreground: foreground.to_string(),
        background: background.to_string(),
        foreground_hex: to_hex_format(foreground, fg_format),
        background_hex: to_hex_format(background, bg_format),
        ratio,
        rating,
    })
}

/// Plain-text form printed to stdout.
pub fn render_report(report: &CheckReport) -> String {
    format!(
        "{}  {}\n{}",
        report.ratio, report.rating.tier, report.rating.description
    )
}

fn readable_format(literal: &str) -> Result<Format> {
    match detect_format(literal) {
        Some(format) if grammar::is_valid(literal, format) => Ok(format),
        _ => Err(ContrastError::Validation {
            message: format!("Could not read colour `{}`", literal),
            help: Some("Use hex (#ffffff), rgb(), rgba() or hsl() notation".to_string()),
        }),
    }
}
