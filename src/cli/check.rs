use crate::error::{PietError, Result};
use crate::graph::build_graph;
use crate::grid::PixelGrid;
use crate::output::{display_path, plural, Printer};
use clap::Args;
use std::path::PathBuf;

/// Report every problem in program images without running them
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Program images to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let mut total = 0;

    for file in &args.files {
        let grid = match PixelGrid::open(file) {
            Ok(grid) => grid,
            Err(e) => {
                printer.error("error", &super::error_chain(&e));
                total += 1;
                continue;
            }
        };

        let output = build_graph(&grid);
        let name = display_path(file);
        if output.is_ok() {
            printer.status(
                "Checked",
                &format!("{} ({})", name, plural(output.graph.len() as u64, "codel", "codels")),
            );
            continue;
        }

        for error in &output.errors {
            printer.error("error", &format!("{}: {}", name, super::error_chain(error)));
        }
        total += output.errors.len();
    }

    if total > 0 {
        return Err(PietError::InvalidProgram { count: total });
    }
    Ok(())
}
