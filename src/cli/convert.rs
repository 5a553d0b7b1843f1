//! Convert command implementation.

use clap::Args;

use crate::config::Config;
use crate::convert::convert;
use crate::error::Result;
use crate::grammar;
use crate::luminance::detect_format;
use crate::output::Printer;
use crate::types::Format;

use super::validate::{invalid_literal, print_diagnostics};

/// Convert a colour literal to another format
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colour literal to convert
    pub literal: String,

    /// Format to convert to
    #[arg(long, short, value_enum)]
    pub to: Format,

    /// Format of the literal (default: detected, then from config)
    #[arg(long, short, value_enum)]
    pub from: Option<Format>,
}

pub fn run(args: ConvertArgs, config: &Config, printer: &Printer) -> Result<()> {
    let converted = convert_literal(&args, config, printer)?;
    println!("{}", converted);
    Ok(())
}

/// Validate the literal in its source format, then convert it.
pub fn convert_literal(args: &ConvertArgs, config: &Config, printer: &Printer) -> Result<String> {
    let from = args
        .from
        .or_else(|| detect_format(&args.literal))
        .unwrap_or(config.format);

    let result = grammar::validate(&args.literal, from);
    if result.has_errors() {
        print_diagnostics(&result, printer);
        return Err(invalid_literal(&args.literal, from));
    }

    let converted = convert(&args.literal, from, args.to);
    printer.status("Converted", &format!("{} to {}", from, args.to));
    Ok(converted)
}
