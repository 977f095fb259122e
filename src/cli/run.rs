use crate::error::Result;
use crate::exec::{Interpreter, Limits, Outcome, ProgramState, TextInput, TextOutput};
use crate::output::{plural, Printer};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Run a program image
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Program image (PNG, GIF, BMP, ...)
    pub file: PathBuf,

    /// Report the number of steps taken
    #[arg(short, long)]
    pub verbose: bool,

    /// Print every program state to stderr
    #[arg(long)]
    pub trace: bool,

    /// Stop after this many steps
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,
}

pub fn run(args: RunArgs, printer: &Printer) -> Result<()> {
    let graph = super::load_graph(&args.file, printer)?;
    let state = ProgramState::new(Arc::new(graph));

    if args.trace {
        trace(printer, "Start", &state);
    }

    let limits = Limits {
        max_steps: args.max_steps,
    };
    let mut interpreter =
        Interpreter::new(TextInput::stdin(), TextOutput::stdout()).with_limits(limits);

    let mut taken = 0;
    let result = interpreter.run_with(state, |state, steps| {
        taken = steps;
        if args.trace {
            trace(printer, &format!("#{steps}"), state);
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if args.verbose {
                printer.error("Failed", &format!("after {}", plural(taken, "step", "steps")));
            }
            return Err(e);
        }
    };

    match report.outcome {
        Outcome::Terminated => {
            if args.verbose {
                printer.status("Finished", &plural(report.steps, "step", "steps"));
            }
        }
        Outcome::StepLimit => {
            printer.warning(
                "Stopped",
                &format!("step limit reached after {}", plural(report.steps, "step", "steps")),
            );
        }
    }

    Ok(())
}

fn trace(printer: &Printer, verb: &str, state: &ProgramState) {
    let next = match state.next_edge() {
        Some(edge) => printer.dim(&format!("next {edge}")),
        None => printer.dim("next ?"),
    };
    printer.info(verb, &format!("{state} {next}"));
}
