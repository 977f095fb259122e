//! Whole-image graph construction.

use crate::error::{PietError, Result};
use crate::grid::{all_codels, PixelGrid};
use crate::types::{DirectionState, Token};

use super::{find_departure, resolve_edge, Edge, Graph, GraphNode};

/// A built graph together with every problem found while building it.
#[derive(Debug)]
pub struct BuildOutput {
    pub graph: Graph,
    /// Edge resolution failures; the graph must not be run unless empty.
    pub errors: Vec<PietError>,
}

impl BuildOutput {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The graph if it built cleanly, otherwise `InvalidProgram`.
    pub fn into_result(self) -> Result<Graph> {
        if self.errors.is_empty() {
            Ok(self.graph)
        } else {
            Err(PietError::InvalidProgram {
                count: self.errors.len(),
            })
        }
    }
}

/// Build the program graph for `grid`.
///
/// Resolution failures do not stop the build; each is recorded with its
/// departure pixel and direction state so all defects can be reported at
/// once. A failed slot is stored as blocked.
pub fn build_graph(grid: &PixelGrid) -> BuildOutput {
    let mut graph = Graph::new();
    let mut errors = Vec::new();

    for codel in all_codels(grid) {
        let edges: [Edge; 8] = std::array::from_fn(|i| {
            let direction = DirectionState::from_index(i);
            match resolve_edge(grid, &codel, direction) {
                Ok(edge) => edge,
                Err(source) => {
                    let departure = find_departure(&codel, direction.dp, direction.cc);
                    errors.push(PietError::EdgeResolution {
                        position: departure,
                        direction,
                        source: Box::new(source),
                    });
                    Edge {
                        token: Token::ToBlack,
                        departure,
                    }
                }
            }
        });

        graph.insert(codel, GraphNode::new(edges));
    }

    BuildOutput { graph, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::codel_at;
    use crate::types::{Cc, Colour, Dp, Operation, Position, PALETTE};

    const RED: Colour = PALETTE[0][1];
    const DARK_RED: Colour = PALETTE[0][2];
    const BLUE: Colour = PALETTE[4][1];
    const K: Colour = Colour::BLACK;
    const W: Colour = Colour::WHITE;

    fn grid(rows: Vec<Vec<Colour>>) -> PixelGrid {
        PixelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_pixel_terminates() {
        let g = grid(vec![vec![RED]]);
        let output = build_graph(&g);
        assert!(output.is_ok());

        let (_, node) = output.graph.entry_at(Position::new(0, 0)).unwrap();
        assert!(node.is_terminal());
        for (_, edge) in node.iter() {
            assert_eq!(edge.token, Token::Terminate);
            assert_eq!(edge.departure, Position::new(0, 0));
        }
    }

    #[test]
    fn test_walled_in_codel_terminates() {
        let g = grid(vec![
            vec![K, K, K, BLUE],
            vec![K, RED, RED, K],
            vec![K, K, K, K],
        ]);
        let output = build_graph(&g);
        let (codel, node) = output.graph.entry_at(Position::new(1, 1)).unwrap();
        assert_eq!(codel.len(), 2);
        assert!(node.is_terminal());
    }

    #[test]
    fn test_two_codels() {
        let g = grid(vec![vec![RED, RED, DARK_RED]]);
        let output = build_graph(&g);
        assert!(output.is_ok());
        assert_eq!(output.graph.len(), 2);

        let red = codel_at(&g, Position::new(0, 0)).unwrap();
        let node = output.graph.node(&red).unwrap();
        let edge = node.edge(DirectionState::START);
        assert_eq!(
            edge.token,
            Token::ToColor {
                operation: Operation::Push,
                codel_size: 2,
            }
        );
        assert_eq!(edge.departure, Position::new(1, 0));
        assert_eq!(
            node.edge(DirectionState::new(Dp::Left, Cc::Left)).token,
            Token::ToBlack
        );

        // dark red -> red is lightness +2 (pop)
        let (_, dark) = output.graph.entry_at(Position::new(2, 0)).unwrap();
        assert_eq!(
            dark.edge(DirectionState::new(Dp::Left, Cc::Left)).token,
            Token::ToColor {
                operation: Operation::Pop,
                codel_size: 1,
            }
        );
    }

    #[test]
    fn test_errors_are_collected_not_fatal() {
        let odd = Colour::rgb(1, 2, 3);
        let g = grid(vec![vec![RED, odd, BLUE], vec![W, K, odd]]);
        let output = build_graph(&g);

        // red -> odd, odd -> red, odd -> blue, blue -> odd, odd(2,1) -> blue
        assert!(output.errors.len() >= 4);
        assert!(output.errors.iter().all(|e| matches!(e, PietError::EdgeResolution { .. })));
        assert_eq!(output.graph.len(), 5);

        assert!(matches!(
            output.into_result(),
            Err(PietError::InvalidProgram { count }) if count >= 4
        ));
    }

    #[test]
    fn test_error_carries_location() {
        let odd = Colour::rgb(1, 2, 3);
        let g = grid(vec![vec![RED, odd]]);
        let output = build_graph(&g);

        let err = output
            .errors
            .iter()
            .find_map(|e| match e {
                PietError::EdgeResolution {
                    position,
                    direction,
                    source,
                } if *position == Position::new(0, 0) => Some((*direction, source)),
                _ => None,
            })
            .unwrap();
        assert_eq!(err.0.dp, Dp::Right);
        assert!(matches!(**err.1, PietError::UnknownColour { .. }));
    }

    #[test]
    fn test_build_is_deterministic() {
        let g = grid(vec![
            vec![RED, RED, W, BLUE],
            vec![DARK_RED, K, W, BLUE],
            vec![DARK_RED, DARK_RED, RED, RED],
        ]);
        let a = build_graph(&g);
        let b = build_graph(&g);
        assert!(a.is_ok());
        assert_eq!(a.graph, b.graph);
    }

    #[test]
    fn test_every_non_black_pixel_has_a_codel() {
        let g = grid(vec![vec![RED, K, W], vec![W, W, BLUE]]);
        let graph = build_graph(&g).into_result().unwrap();
        for p in g.positions() {
            let expected = g.get(p) != Some(K);
            assert_eq!(graph.codel_at(p).is_some(), expected, "{p}");
        }
    }
}
