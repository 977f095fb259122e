//! Program execution.
//!
//! [`step`] advances a [`ProgramState`] by exactly one token; an
//! [`Interpreter`] owns the input/output collaborators and drives repeated
//! steps under configurable [`Limits`].

mod engine;
pub mod io;
mod ops;
mod state;

pub use engine::{step, Interpreter, Limits, Outcome, RunReport, Status};
pub use io::{InputSource, OutputSink, TextInput, TextOutput};
pub use state::ProgramState;
