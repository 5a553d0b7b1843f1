use clap::Parser;
use contrast::cli::{self, Cli, Commands};
use contrast::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let Cli {
        config: config_path,
        command,
    } = Cli::parse();
    let printer = Printer::new();

    match command {
        Commands::Check(args) => {
            let config = cli::load_config(config_path.as_deref())?;
            cli::check::run(args, &config, &printer)?;
        }
        Commands::Convert(args) => {
            let config = cli::load_config(config_path.as_deref())?;
            cli::convert::run(args, &config, &printer)?;
        }
        Commands::Validate(args) => {
            let config = cli::load_config(config_path.as_deref())?;
            cli::validate::run(args, &config, &printer)?;
        }
        Commands::Placeholder(args) => cli::placeholder::run(args)?,
        Commands::Init(args) => cli::init::run(args, &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}
