use std::collections::VecDeque;

use crate::index::{
    vec::{Idx, IndexVec},
    Indexable,
};

use super::{DirectedGraph, Successors};

/// Progress of a single node within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    Queued,
    Visited,
}

impl<I: Idx> Indexable<I> for VisitState {}

/// A lazy breadth-first search.
///
/// Visit states live in the search itself and start out as `Unvisited`
/// for every node, so two searches over the same graph never observe each
/// other. Iterating yields nodes in the order they are dequeued.
pub struct BreadthFirstSearch<'graph, G>
where
    G: DirectedGraph + Successors,
{
    graph: &'graph G,
    queue: VecDeque<G::Node>,
    states: IndexVec<G::Node, VisitState>,
}

impl<'graph, G> BreadthFirstSearch<'graph, G>
where
    G: DirectedGraph + Successors,
{
    pub fn new(graph: &'graph G) -> Self {
        Self {
            graph,
            queue: VecDeque::new(),
            states: std::iter::repeat(VisitState::Unvisited)
                .take(graph.num_nodes())
                .collect(),
        }
    }

    /// Enqueues `start` unless it has already been reached.
    ///
    /// States are kept, so calling this after the queue drained continues
    /// the search into another component.
    pub fn run_from(&mut self, start: G::Node) -> &mut Self {
        if self.states[start] == VisitState::Unvisited {
            self.enqueue(start);
        }
        self
    }

    /// The lowest-index node that no search step has reached yet.
    pub fn next_unvisited(&self) -> Option<G::Node> {
        self.states
            .iter_enumerated()
            .find(|(_, state)| **state == VisitState::Unvisited)
            .map(|(node, _)| node)
    }

    pub fn state(&self, node: G::Node) -> VisitState {
        self.states[node]
    }

    fn enqueue(&mut self, node: G::Node) {
        self.states[node] = VisitState::Queued;
        self.queue.push_back(node);
    }
}

impl<G> Iterator for BreadthFirstSearch<'_, G>
where
    G: DirectedGraph + Successors,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.states[node] = VisitState::Visited;
        tracing::trace!(?node, "dequeued");

        let graph = self.graph;
        for succ in graph.successors(node) {
            if self.states[succ] == VisitState::Unvisited {
                self.enqueue(succ);
            }
        }
        Some(node)
    }
}

/// Breadth-first search that restarts from the lowest-index unvisited node
/// whenever the queue drains, until every node has been visited.
pub struct ExhaustiveBreadthFirstSearch<'graph, G>
where
    G: DirectedGraph + Successors,
{
    search: BreadthFirstSearch<'graph, G>,
}

impl<'graph, G> ExhaustiveBreadthFirstSearch<'graph, G>
where
    G: DirectedGraph + Successors,
{
    pub fn new(graph: &'graph G, start: G::Node) -> Self {
        let mut search = BreadthFirstSearch::new(graph);
        search.run_from(start);
        Self { search }
    }
}

impl<G> Iterator for ExhaustiveBreadthFirstSearch<'_, G>
where
    G: DirectedGraph + Successors,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.search.next() {
            return Some(node);
        }
        let restart = self.search.next_unvisited()?;
        self.search.run_from(restart).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adjacency lists over `usize` nodes.
    struct Lists(Vec<Vec<usize>>);

    impl DirectedGraph for Lists {
        type Node = usize;

        fn num_nodes(&self) -> usize {
            self.0.len()
        }
    }

    impl Successors for Lists {
        fn successors(&self, node: usize) -> impl Iterator<Item = usize> {
            self.0[node].iter().copied()
        }
    }

    #[test]
    fn test_bfs_order_follows_successor_order() {
        let graph = Lists(vec![vec![2, 1], vec![3], vec![3], vec![]]);
        let mut search = BreadthFirstSearch::new(&graph);
        let order: Vec<_> = search.run_from(0).by_ref().collect();
        assert_eq!(order, vec![0, 2, 1, 3]);
        assert_eq!(search.state(3), VisitState::Visited);
    }

    #[test]
    fn test_bfs_stays_in_component() {
        let graph = Lists(vec![vec![1], vec![0], vec![3], vec![2]]);
        let mut search = BreadthFirstSearch::new(&graph);
        let order: Vec<_> = search.run_from(1).by_ref().collect();
        assert_eq!(order, vec![1, 0]);
        assert_eq!(search.state(2), VisitState::Unvisited);
        assert_eq!(search.next_unvisited(), Some(2));
    }

    #[test]
    fn test_exhaustive_covers_every_node_once() {
        let graph = Lists(vec![vec![], vec![4], vec![], vec![], vec![1]]);
        let order: Vec<_> = ExhaustiveBreadthFirstSearch::new(&graph, 4).collect();
        assert_eq!(order, vec![4, 1, 0, 2, 3]);
    }
}
