use clap::Parser;
use miette::Result;
use piet::cli::{Cli, Commands};
use piet::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Run(args) => piet::cli::run::run(args, &printer)?,
        Commands::Check(args) => piet::cli::check::run(args, &printer)?,
        Commands::Graph(args) => piet::cli::graph::run(args, &printer)?,
        Commands::Completions(args) => piet::cli::completions::run(args)?,
    }

    Ok(())
}
