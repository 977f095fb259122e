//! piet - an interpreter for programs drawn as colour-grid images
//!
//! A program image is split into codels (same-coloured regions), a graph of
//! every codel's eight possible exits is built once, and a stack machine
//! walks that graph one transition at a time.

pub mod cli;
pub mod error;
pub mod exec;
pub mod graph;
pub mod grid;
pub mod output;
pub mod types;

pub use error::{PietError, Result};
pub use exec::{
    step, InputSource, Interpreter, Limits, Outcome, OutputSink, ProgramState, RunReport, Status,
    TextInput, TextOutput,
};
pub use graph::{build_graph, find_departure, resolve_edge, BuildOutput, Edge, Graph, GraphNode};
pub use grid::{all_codels, codel_at, Codel, PixelGrid};
pub use types::{
    colour_delta, Cc, Colour, ColourDelta, DirectionState, Dp, Hue, Lightness, Operation,
    PaletteColour, Position, Token, PALETTE,
};
