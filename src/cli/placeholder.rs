//! Placeholder command implementation.

use clap::Args;

use crate::error::Result;
use crate::format_placeholder;
use crate::types::Format;

/// Print example literals for each format
#[derive(Args, Debug)]
pub struct PlaceholderArgs {
    /// Format to show (default: all formats)
    #[arg(value_enum)]
    pub format: Option<Format>,
}

pub fn run(args: PlaceholderArgs) -> Result<()> {
    println!("{}", render(args.format));
    Ok(())
}

/// One literal for a single format, or a `name literal` table for all of them.
pub fn render(format: Option<Format>) -> String {
    match format {
        Some(format) => format_placeholder(format).to_string(),
        None => Format::ALL
            .iter()
            .map(|f| format!("{:<5} {}", f.name(), format_placeholder(*f)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
