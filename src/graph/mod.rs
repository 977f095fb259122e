//! The program graph.
//!
//! Every codel of the image maps to a [`GraphNode`]: one [`Edge`] per
//! direction state, telling the engine which token fires and from which
//! departure pixel the cursor leaves. The graph is built once and never
//! mutated afterwards.

mod builder;
mod edge;

pub use builder::{build_graph, BuildOutput};
pub use edge::{find_departure, resolve_edge};

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::grid::Codel;
use crate::types::{DirectionState, Position, Token};

/// The outcome of leaving a codel in one direction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub token: Token,
    /// Pixel inside the codel the cursor leaves from.
    pub departure: Position,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.departure, self.token)
    }
}

/// The eight outgoing edges of one codel, indexed by direction state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    edges: [Edge; 8],
}

impl GraphNode {
    /// Build a node from edges ordered as [`DirectionState::all`].
    ///
    /// A node whose every edge is blocked can never be left; all of its
    /// tokens become [`Token::Terminate`].
    pub fn new(mut edges: [Edge; 8]) -> Self {
        if edges.iter().all(|e| e.token.is_blocked()) {
            for edge in &mut edges {
                edge.token = Token::Terminate;
            }
        }
        Self { edges }
    }

    pub fn edge(&self, direction: DirectionState) -> Edge {
        self.edges[direction.index()]
    }

    pub fn is_terminal(&self) -> bool {
        self.edges.iter().all(|e| e.token == Token::Terminate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DirectionState, Edge)> + '_ {
        DirectionState::all().zip(self.edges.iter().copied())
    }
}

/// Codel to node mapping, with a reverse index from pixel to codel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    entries: Vec<(Codel, GraphNode)>,
    owners: HashMap<Position, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, codel: Codel, node: GraphNode) {
        let index = self.entries.len();
        self.owners.extend(codel.positions().map(|p| (p, index)));
        self.entries.push((codel, node));
    }

    /// Number of codels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Node for `codel`, matched structurally.
    pub fn node(&self, codel: &Codel) -> Option<&GraphNode> {
        let first = codel.positions().next()?;
        self.entry_at(first)
            .filter(|(c, _)| *c == codel)
            .map(|(_, node)| node)
    }

    /// Codel owning `position`; `None` for black or off-grid pixels.
    pub fn codel_at(&self, position: Position) -> Option<&Codel> {
        self.entry_at(position).map(|(codel, _)| codel)
    }

    /// Codel and node owning `position`.
    pub fn entry_at(&self, position: Position) -> Option<(&Codel, &GraphNode)> {
        let index = *self.owners.get(&position)?;
        self.entries.get(index).map(|(c, n)| (c, n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Codel, &GraphNode)> {
        self.entries.iter().map(|(c, n)| (c, n))
    }
}
