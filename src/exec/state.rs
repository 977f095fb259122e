//! The value threaded through execution.

use std::fmt;
use std::sync::Arc;

use crate::graph::{Edge, Graph};
use crate::grid::Codel;
use crate::types::{DirectionState, Position};

/// Where the cursor is, where it points, and what is on the stack.
///
/// States are replaced rather than mutated by each step, so keeping old
/// ones around is a valid history. The graph is shared, never copied.
#[derive(Debug, Clone)]
pub struct ProgramState {
    pub graph: Arc<Graph>,
    pub position: Position,
    pub direction: DirectionState,
    /// Data stack; the top is the last element.
    pub stack: Vec<i64>,
}

impl ProgramState {
    /// Initial state: top-left pixel, `(right, left)`, empty stack.
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            position: Position::new(0, 0),
            direction: DirectionState::START,
            stack: Vec::new(),
        }
    }

    pub fn with_stack(mut self, stack: Vec<i64>) -> Self {
        self.stack = stack;
        self
    }

    pub fn with_direction(mut self, direction: DirectionState) -> Self {
        self.direction = direction;
        self
    }

    /// Codel under the cursor.
    pub fn codel(&self) -> Option<&Codel> {
        self.graph.codel_at(self.position)
    }

    /// The edge the next step will take.
    pub fn next_edge(&self) -> Option<Edge> {
        self.graph
            .entry_at(self.position)
            .map(|(_, node)| node.edge(self.direction))
    }
}

/// States are equal when they share the same graph allocation and agree on
/// position, direction and stack. Two separately built graphs never
/// compare equal here, even when [`Graph`]'s structural `Eq` says they match.
impl PartialEq for ProgramState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph)
            && self.position == other.position
            && self.direction == other.direction
            && self.stack == other.stack
    }
}

impl fmt::Display for ProgramState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pos: {} / {} {}. Stack: {:?}",
            self.position,
            self.direction.arrow(),
            self.direction,
            self.stack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ProgramState::new(Arc::new(Graph::new()));
        assert_eq!(state.position, Position::new(0, 0));
        assert_eq!(state.direction, DirectionState::START);
        assert!(state.stack.is_empty());
        assert!(state.codel().is_none());
    }

    #[test]
    fn test_clone_shares_graph() {
        let state = ProgramState::new(Arc::new(Graph::new())).with_stack(vec![1, 2]);
        let copy = state.clone();
        assert!(Arc::ptr_eq(&state.graph, &copy.graph));
        assert_eq!(state, copy);
    }

    #[test]
    fn test_equality_needs_shared_graph() {
        let a = ProgramState::new(Arc::new(Graph::new()));
        let b = ProgramState::new(Arc::new(Graph::new()));
        assert_eq!(*a.graph, *b.graph);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let state = ProgramState::new(Arc::new(Graph::new())).with_stack(vec![3, 4]);
        assert_eq!(state.to_string(), "Pos: (0, 0) / \u{2197} r,l. Stack: [3, 4]");
    }
}
