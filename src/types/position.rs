//! Grid coordinates.

use std::fmt;

use serde::Serialize;

use super::Dp;

/// A pixel coordinate, 0-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell along `dp`.
    ///
    /// Returns `None` when the move would leave the non-negative quadrant;
    /// the upper bounds are the grid's business.
    pub fn step(self, dp: Dp) -> Option<Self> {
        match dp {
            Dp::Right => self.x.checked_add(1).map(|x| Self::new(x, self.y)),
            Dp::Down => self.y.checked_add(1).map(|y| Self::new(self.x, y)),
            Dp::Left => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            Dp::Up => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
