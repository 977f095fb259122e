//! The eighteen instructions and the colour-transition table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PietError, Result};

use super::ColourDelta;

/// An instruction selected by a colour transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    #[serde(rename = "noop")]
    Noop,
    #[serde(rename = "push")]
    Push,
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "subtract")]
    Subtract,
    #[serde(rename = "multiply")]
    Multiply,
    #[serde(rename = "divide")]
    Divide,
    #[serde(rename = "mod")]
    Mod,
    #[serde(rename = "not")]
    Not,
    #[serde(rename = "greater")]
    Greater,
    #[serde(rename = "pointer")]
    Pointer,
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "duplicate")]
    Duplicate,
    #[serde(rename = "roll")]
    Roll,
    #[serde(rename = "inN")]
    InNumber,
    #[serde(rename = "inC")]
    InChar,
    #[serde(rename = "outN")]
    OutNumber,
    #[serde(rename = "outC")]
    OutChar,
}

/// Rows are hue change, columns are lightness change.
const TABLE: [[Operation; 3]; 6] = [
    [Operation::Noop, Operation::Push, Operation::Pop],
    [Operation::Add, Operation::Subtract, Operation::Multiply],
    [Operation::Divide, Operation::Mod, Operation::Not],
    [Operation::Greater, Operation::Pointer, Operation::Switch],
    [Operation::Duplicate, Operation::Roll, Operation::InNumber],
    [Operation::InChar, Operation::OutNumber, Operation::OutChar],
];

impl Operation {
    /// Look up the operation for a hue/lightness change.
    pub fn for_change(hue: u8, lightness: u8) -> Result<Self> {
        TABLE
            .get(hue as usize)
            .and_then(|row| row.get(lightness as usize))
            .copied()
            .ok_or_else(|| PietError::UnknownToken {
                name: format!("hue change {hue}, lightness change {lightness}"),
            })
    }

    /// Look up the operation for a colour delta.
    pub fn for_delta(delta: ColourDelta) -> Result<Self> {
        Self::for_change(delta.hue, delta.lightness)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Noop => "noop",
            Operation::Push => "push",
            Operation::Pop => "pop",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Mod => "mod",
            Operation::Not => "not",
            Operation::Greater => "greater",
            Operation::Pointer => "pointer",
            Operation::Switch => "switch",
            Operation::Duplicate => "duplicate",
            Operation::Roll => "roll",
            Operation::InNumber => "inN",
            Operation::InChar => "inC",
            Operation::OutNumber => "outN",
            Operation::OutChar => "outC",
        }
    }
}

impl FromStr for Operation {
    type Err = PietError;

    fn from_str(s: &str) -> Result<Self> {
        TABLE
            .iter()
            .flatten()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| PietError::UnknownToken {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
