pub mod traversal;

use crate::index;

pub trait DirectedGraph {
    type Node: index::vec::Idx;

    fn num_nodes(&self) -> usize;
}

/// Nodes reachable through a single outgoing edge.
///
/// Traversals visit successors in the order this iterator yields them, so
/// implementations should yield them in a stable order.
pub trait Successors: DirectedGraph {
    fn successors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;
}

pub trait Predecessors: DirectedGraph {
    fn predecessors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;
}
