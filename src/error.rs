use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Colour, DirectionState, Position};

/// Main error type for piet operations
#[derive(Error, Diagnostic, Debug)]
pub enum PietError {
    #[error("IO error: {0}")]
    #[diagnostic(code(piet::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(piet::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid grid: {message}")]
    #[diagnostic(code(piet::grid))]
    InvalidGrid { message: String },

    #[error("Unknown colour {colour} at {position}")]
    #[diagnostic(
        code(piet::colour),
        help("Programs may only use black, white and the 18 palette colours")
    )]
    UnknownColour { colour: Colour, position: Position },

    #[error("Unknown token: {name}")]
    #[diagnostic(code(piet::token))]
    UnknownToken { name: String },

    #[error("Program starts in a black pixel at {position}")]
    #[diagnostic(code(piet::exec::black_start))]
    StartsInBlack { position: Position },

    #[error("Division by zero at {position}, direction {direction}")]
    #[diagnostic(code(piet::exec::division_by_zero))]
    DivisionByZero {
        position: Position,
        direction: DirectionState,
    },

    #[error("Cannot resolve edge at {position}, direction {direction}")]
    #[diagnostic(code(piet::build::edge))]
    EdgeResolution {
        position: Position,
        direction: DirectionState,
        #[source]
        source: Box<PietError>,
    },

    #[error("Program has {count} build error(s)")]
    #[diagnostic(
        code(piet::build),
        help("Run `piet check` to list every problem in the image")
    )]
    InvalidProgram { count: usize },
}

pub type Result<T> = std::result::Result<T, PietError>;
