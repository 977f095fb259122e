//! Region detection: flood fill of same-coloured pixels into codels.

use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

use crate::types::{Colour, Dp, Position};

use super::PixelGrid;

/// A 4-connected set of same-coloured pixels.
///
/// Equality and hashing only look at the member positions, so the same
/// region found from two different seed pixels compares equal.
#[derive(Debug, Clone)]
pub struct Codel {
    colour: Colour,
    seed: Position,
    pixels: BTreeSet<Position>,
}

impl Codel {
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Number of pixels in the codel.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; a codel holds at least its seed pixel.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.pixels.contains(&position)
    }

    /// Member positions in ascending `(x, y)` order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.pixels.iter().copied()
    }

    /// Pick the member maximising `key`, starting from the seed pixel.
    pub(crate) fn max_by_key<K: Ord>(&self, key: impl Fn(Position) -> K) -> Position {
        self.positions().fold(self.seed, |best, p| {
            if key(p) > key(best) {
                p
            } else {
                best
            }
        })
    }
}

impl PartialEq for Codel {
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl Eq for Codel {}

impl Hash for Codel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pixels.hash(state);
    }
}

/// Flood fill the codel containing `position`.
///
/// White pixels are never merged: a white start pixel is a codel on its
/// own. Returns `None` for black or off-grid positions.
pub fn codel_at(grid: &PixelGrid, position: Position) -> Option<Codel> {
    let colour = grid.get(position)?;
    if colour.is_black() {
        return None;
    }

    let mut pixels = BTreeSet::new();
    pixels.insert(position);

    if !colour.is_white() {
        let mut pending = vec![position];
        while let Some(current) = pending.pop() {
            for dp in Dp::ALL {
                let Some(next) = current.step(dp) else {
                    continue;
                };
                if grid.get(next) == Some(colour) && pixels.insert(next) {
                    pending.push(next);
                }
            }
        }
    }

    Some(Codel {
        colour,
        seed: position,
        pixels,
    })
}

/// Partition every non-black pixel of the grid into codels.
///
/// Codels come out in row-major order of their first pixel.
pub fn all_codels(grid: &PixelGrid) -> Vec<Codel> {
    let mut visited: HashSet<Position> = HashSet::new();
    let mut codels = Vec::new();

    for position in grid.positions() {
        if visited.contains(&position) {
            continue;
        }
        if let Some(codel) = codel_at(grid, position) {
            visited.extend(codel.positions());
            codels.push(codel);
        }
    }

    codels
}
