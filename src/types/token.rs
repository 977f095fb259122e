//! Transition tokens.

use std::fmt;

use serde::Serialize;

use super::Operation;

/// What happens when leaving a codel in one direction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Blocked by black or the grid edge.
    ToBlack,
    /// Slides into a white pixel, no operation.
    ToWhite,
    /// Enters a chromatic colour; `codel_size` is the source codel's size.
    ToColor {
        operation: Operation,
        codel_size: usize,
    },
    /// The codel is blocked in every direction state.
    Terminate,
}

impl Token {
    pub fn is_blocked(self) -> bool {
        matches!(self, Token::ToBlack)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ToBlack => f.write_str("toBlack"),
            Token::ToWhite => f.write_str("toWhite"),
            Token::ToColor {
                operation: Operation::Push,
                codel_size,
            } => write!(f, "push({codel_size})"),
            Token::ToColor { operation, .. } => write!(f, "{operation}"),
            Token::Terminate => f.write_str("exit"),
        }
    }
}
