//! Edge resolution: where a codel is left from and what that transition means.

use crate::error::{PietError, Result};
use crate::grid::{Codel, PixelGrid};
use crate::types::{colour_delta, Cc, DirectionState, Dp, Operation, PaletteColour, Position, Token};

use super::Edge;

/// Find the pixel a codel is left from in direction state `(dp, cc)`.
///
/// First the furthest pixels along `dp`, then among those the furthest
/// towards the side `cc` selects, relative to `dp`:
///
/// | dp    | axis  | cc = left | cc = right |
/// |-------|-------|-----------|------------|
/// | right | max x | min y     | max y      |
/// | down  | max y | max x     | min x      |
/// | left  | min x | max y     | min y      |
/// | up    | min y | min x     | max x      |
pub fn find_departure(codel: &Codel, dp: Dp, cc: Cc) -> Position {
    let toward = |value: usize, maximise: bool| -> i128 {
        if maximise {
            value as i128
        } else {
            -(value as i128)
        }
    };
    let left = cc == Cc::Left;

    match dp {
        Dp::Right => codel.max_by_key(|p| (toward(p.x, true), toward(p.y, !left))),
        Dp::Down => codel.max_by_key(|p| (toward(p.y, true), toward(p.x, left))),
        Dp::Left => codel.max_by_key(|p| (toward(p.x, false), toward(p.y, left))),
        Dp::Up => codel.max_by_key(|p| (toward(p.y, false), toward(p.x, !left))),
    }
}

/// Resolve the edge leaving `codel` in `direction`.
///
/// Off-grid and black neighbours block; white slides; a chromatic
/// neighbour selects an operation from the colour change. Off-palette
/// colours on either side fail with the offending position.
pub fn resolve_edge(grid: &PixelGrid, codel: &Codel, direction: DirectionState) -> Result<Edge> {
    let departure = find_departure(codel, direction.dp, direction.cc);
    let blocked = Edge {
        token: Token::ToBlack,
        departure,
    };

    let Some(next) = departure.step(direction.dp) else {
        return Ok(blocked);
    };
    let Some(next_colour) = grid.get(next) else {
        return Ok(blocked);
    };

    let token = match next_colour.classify(next)? {
        PaletteColour::Black => Token::ToBlack,
        PaletteColour::White => Token::ToWhite,
        PaletteColour::Chromatic { .. } => {
            let here = grid.get(departure).ok_or(PietError::InvalidGrid {
                message: format!("departure {} is outside the grid", departure),
            })?;
            let delta = colour_delta((here, departure), (next_colour, next))?;
            Token::ToColor {
                operation: Operation::for_delta(delta)?,
                codel_size: codel.len(),
            }
        }
    };

    Ok(Edge { token, departure })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::codel_at;
    use crate::types::{Colour, PALETTE};

    const RED: Colour = PALETTE[0][1];
    const DARK_RED: Colour = PALETTE[0][2];
    const GREEN: Colour = PALETTE[2][1];
    const K: Colour = Colour::BLACK;
    const W: Colour = Colour::WHITE;

    fn grid(rows: Vec<Vec<Colour>>) -> PixelGrid {
        PixelGrid::from_rows(rows).unwrap()
    }

    /// A plus-shaped red codel centred on (2, 2), with extra pixels making
    /// every tie-break observable.
    fn plus() -> (PixelGrid, Codel) {
        let g = grid(vec![
            vec![K, RED, RED, K, K],
            vec![K, K, RED, K, K],
            vec![RED, RED, RED, RED, RED],
            vec![RED, K, RED, K, RED],
            vec![K, K, RED, RED, K],
        ]);
        let codel = codel_at(&g, Position::new(2, 2)).unwrap();
        (g, codel)
    }

    #[test]
    fn test_departure_table() {
        let (_, codel) = plus();
        let cases = [
            (Dp::Right, Cc::Left, (4, 2)),
            (Dp::Right, Cc::Right, (4, 3)),
            (Dp::Down, Cc::Left, (3, 4)),
            (Dp::Down, Cc::Right, (2, 4)),
            (Dp::Left, Cc::Left, (0, 3)),
            (Dp::Left, Cc::Right, (0, 2)),
            (Dp::Up, Cc::Left, (1, 0)),
            (Dp::Up, Cc::Right, (2, 0)),
        ];
        for (dp, cc, (x, y)) in cases {
            let departure = find_departure(&codel, dp, cc);
            assert_eq!(departure, Position::new(x, y), "dp={dp:?} cc={cc:?}");
            assert!(codel.contains(departure));
        }
    }

    #[test]
    fn test_departure_is_extremal() {
        let (_, codel) = plus();
        for state in DirectionState::all() {
            let d = find_departure(&codel, state.dp, state.cc);
            for p in codel.positions() {
                match state.dp {
                    Dp::Right => assert!(p.x <= d.x),
                    Dp::Down => assert!(p.y <= d.y),
                    Dp::Left => assert!(p.x >= d.x),
                    Dp::Up => assert!(p.y >= d.y),
                }
            }
        }
    }

    #[test]
    fn test_departure_deterministic_across_seeds() {
        let (g, codel) = plus();
        let other = codel_at(&g, Position::new(1, 0)).unwrap();
        for state in DirectionState::all() {
            assert_eq!(
                find_departure(&codel, state.dp, state.cc),
                find_departure(&other, state.dp, state.cc)
            );
        }
    }

    #[test]
    fn test_resolve_off_grid_is_black() {
        let g = grid(vec![vec![RED]]);
        let codel = codel_at(&g, Position::new(0, 0)).unwrap();
        for state in DirectionState::all() {
            let edge = resolve_edge(&g, &codel, state).unwrap();
            assert_eq!(edge.token, Token::ToBlack);
            assert_eq!(edge.departure, Position::new(0, 0));
        }
    }

    #[test]
    fn test_resolve_black_white_and_colour() {
        let g = grid(vec![
            vec![K, W, K],
            vec![RED, RED, DARK_RED],
            vec![K, K, K],
        ]);
        let codel = codel_at(&g, Position::new(0, 1)).unwrap();

        let right = resolve_edge(&g, &codel, DirectionState::START).unwrap();
        assert_eq!(
            right.token,
            Token::ToColor {
                operation: Operation::Push,
                codel_size: 2,
            }
        );
        assert_eq!(right.departure, Position::new(1, 1));

        // up from the leftmost top pixel hits black, from the rightmost hits white
        let up_left = resolve_edge(&g, &codel, DirectionState::new(Dp::Up, Cc::Left)).unwrap();
        assert_eq!(up_left.token, Token::ToBlack);
        let up_right = resolve_edge(&g, &codel, DirectionState::new(Dp::Up, Cc::Right)).unwrap();
        assert_eq!(up_right.token, Token::ToWhite);
        assert_eq!(up_right.departure, Position::new(1, 1));
    }

    #[test]
    fn test_resolve_hue_change() {
        let g = grid(vec![vec![RED, GREEN]]);
        let codel = codel_at(&g, Position::new(0, 0)).unwrap();
        let edge = resolve_edge(&g, &codel, DirectionState::START).unwrap();
        assert_eq!(
            edge.token,
            Token::ToColor {
                operation: Operation::Divide,
                codel_size: 1,
            }
        );
    }

    #[test]
    fn test_resolve_from_white_is_noop() {
        let g = grid(vec![vec![W, GREEN]]);
        let codel = codel_at(&g, Position::new(0, 0)).unwrap();
        let edge = resolve_edge(&g, &codel, DirectionState::START).unwrap();
        assert_eq!(
            edge.token,
            Token::ToColor {
                operation: Operation::Noop,
                codel_size: 1,
            }
        );
    }

    #[test]
    fn test_resolve_unknown_neighbour_fails() {
        let g = grid(vec![vec![RED, Colour::rgb(10, 20, 30)]]);
        let codel = codel_at(&g, Position::new(0, 0)).unwrap();
        let err = resolve_edge(&g, &codel, DirectionState::START).unwrap_err();
        assert!(matches!(
            err,
            PietError::UnknownColour { position, .. } if position == Position::new(1, 0)
        ));
    }

    #[test]
    fn test_resolve_unknown_source_fails() {
        let g = grid(vec![vec![Colour::rgb(10, 20, 30), RED]]);
        let codel = codel_at(&g, Position::new(0, 0)).unwrap();
        let err = resolve_edge(&g, &codel, DirectionState::START).unwrap_err();
        assert!(matches!(
            err,
            PietError::UnknownColour { position, .. } if position == Position::new(0, 0)
        ));
    }
}
