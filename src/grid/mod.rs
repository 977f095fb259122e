//! The pixel grid a program is read from.
//!
//! A `PixelGrid` holds raw colours exactly as decoded. Nothing is classified
//! up front: an off-palette pixel only becomes an error when the graph
//! builder actually needs its colour.

mod loader;
mod region;

pub use region::{all_codels, codel_at, Codel};

use crate::error::{PietError, Result};
use crate::types::{Colour, Position};

/// A rectangular, row-major grid of raw colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl PixelGrid {
    /// Create a grid from row-major pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<Colour>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PietError::InvalidGrid {
                message: format!("grid must not be empty ({}x{})", width, height),
            });
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(PietError::InvalidGrid {
                message: format!(
                    "expected {} pixels for a {}x{} grid, got {}",
                    width.saturating_mul(height),
                    width,
                    height,
                    pixels.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<Colour>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PietError::InvalidGrid {
                message: format!("row {} has {} pixels, expected {}", y, row.len(), width),
            });
        }

        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Colour at `position`, or `None` off the grid.
    pub fn get(&self, position: Position) -> Option<Colour> {
        if self.contains(position) {
            self.pixels.get(position.y * self.width + position.x).copied()
        } else {
            None
        }
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = PixelGrid::from_rows(vec![
            vec![Colour::BLACK, Colour::WHITE],
            vec![Colour::WHITE, Colour::BLACK],
        ])
        .unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Position::new(1, 0)), Some(Colour::WHITE));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Colour::BLACK));
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = PixelGrid::from_rows(vec![vec![Colour::BLACK, Colour::WHITE], vec![Colour::BLACK]]);
        assert!(matches!(result, Err(PietError::InvalidGrid { .. })));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(PixelGrid::from_rows(vec![]).is_err());
        assert!(PixelGrid::new(0, 3, vec![]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(PixelGrid::new(2, 2, vec![Colour::BLACK; 3]).is_err());
    }

    #[test]
    fn test_positions_row_major() {
        let grid = PixelGrid::new(2, 2, vec![Colour::WHITE; 4]).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
