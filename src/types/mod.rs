//! Core domain types for piet.
//!
//! This module contains the value types shared by the graph builder and
//! the execution engine:
//! - `Colour` / `PaletteColour` - raw pixels and their palette classification
//! - `Position`, `Dp`, `Cc`, `DirectionState` - where the cursor is and where it points
//! - `Operation`, `Token` - what a transition between codels does

mod colour;
mod direction;
mod operation;
mod position;
mod token;

pub use colour::{colour_delta, Colour, ColourDelta, Hue, Lightness, PaletteColour, PALETTE};
pub use direction::{Cc, DirectionState, Dp};
pub use operation::Operation;
pub use position::Position;
pub use token::Token;
