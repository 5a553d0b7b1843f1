//! Validate command implementation.

use clap::Args;

use crate::config::Config;
use crate::error::{ContrastError, Result};
use crate::grammar::{self, Severity, ValidationResult};
use crate::output::{plural, Printer};
use crate::types::Format;

/// Validate a colour literal against a format
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Colour literal to validate
    pub literal: String,

    /// Format to validate against (default: from config)
    #[arg(long, short, value_enum)]
    pub format: Option<Format>,
}

pub fn run(args: ValidateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let format = args.format.unwrap_or(config.format);
    let result = grammar::validate(&args.literal, format);

    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(invalid_literal(&args.literal, format));
    }

    printer.success("Valid", &format!("{} ({})", args.literal, format));
    Ok(())
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("  {}: {}", printer.dim("help"), help);
        }
    }

    if !result.has_errors() && result.has_warnings() {
        printer.warning(
            "Accepted",
            &format!("with {}", plural(result.warning_count(), "warning", "warnings")),
        );
    }
}

/// Error returned when a literal fails the grammar of `format`.
pub fn invalid_literal(literal: &str, format: Format) -> ContrastError {
    ContrastError::Validation {
        message: format!("`{}` is not a valid {} colour", literal, format),
        help: Some(format!("Expected something like {}", format.placeholder())),
    }
}
