pub mod check;
pub mod completions;
pub mod graph;
pub mod run;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{PietError, Result};
use crate::graph::{build_graph, Graph};
use crate::grid::PixelGrid;
use crate::output::{display_path, plural, Printer};

/// piet - run programs drawn as colour-grid images
#[derive(Parser, Debug)]
#[command(name = "piet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a program image
    Run(run::RunArgs),

    /// Report every problem in program images without running them
    Check(check::CheckArgs),

    /// Print the codel graph of a program image
    Graph(graph::GraphArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load an image and build its graph, printing every build error.
pub(crate) fn load_graph(path: &Path, printer: &Printer) -> Result<Graph> {
    let grid = PixelGrid::open(path)?;
    printer.status(
        "Loading",
        &format!("{} ({}x{})", display_path(path), grid.width(), grid.height()),
    );

    let output = build_graph(&grid);
    for error in &output.errors {
        printer.error("error", &error_chain(error));
    }
    let graph = output.into_result()?;

    printer.info("Built", &plural(graph.len() as u64, "codel", "codels"));
    Ok(graph)
}

/// An error and its causes on one line.
pub(crate) fn error_chain(error: &PietError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
