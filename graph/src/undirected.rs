use data_structure::graph::{
    traversal::{BreadthFirstSearch, ExhaustiveBreadthFirstSearch},
    DirectedGraph, Successors,
};

use crate::{
    error::{Endpoint, GraphError, Result},
    matrix::AdjacencyMatrix,
    Edge, Graph, VertexId,
};

/// An undirected, unweighted graph over a symmetric adjacency matrix.
#[derive(Debug, Clone, Default)]
pub struct UndirectedMatrixGraph {
    matrix: AdjacencyMatrix,
}

impl UndirectedMatrixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::with_capacity(capacity),
        }
    }

    /// Number of vertices sharing an edge with `name`.
    pub fn degree(&self, name: &str) -> Result<usize> {
        let id = self.matrix.require(name, Endpoint::Vertex)?;
        Ok(self.matrix.row(id).count())
    }

    /// Breadth-first order of the component containing `start`.
    ///
    /// Neighbors are enqueued in ascending position order, so the sequence
    /// only depends on insertion order. Each call starts from fresh visit
    /// states.
    pub fn bfs_traversal(&self, start: &str) -> Result<impl Iterator<Item = &str> + '_> {
        let start = self.matrix.require(start, Endpoint::Vertex)?;
        let mut search = BreadthFirstSearch::new(self);
        search.run_from(start);
        Ok(search.map(|id| self.matrix.name(id)))
    }

    /// Like [`Self::bfs_traversal`], then continues from every vertex left
    /// unvisited, lowest position first, until all vertices are emitted.
    pub fn bfs_traversal_all(&self, start: &str) -> Result<impl Iterator<Item = &str> + '_> {
        let start = self.matrix.require(start, Endpoint::Vertex)?;
        Ok(ExhaustiveBreadthFirstSearch::new(self, start).map(|id| self.matrix.name(id)))
    }

    /// The output of [`Self::bfs_traversal_all`] split per connected component.
    pub fn connected_components(&self, start: &str) -> Result<Vec<Vec<&str>>> {
        let start = self.matrix.require(start, Endpoint::Vertex)?;
        let mut search = BreadthFirstSearch::new(self);
        let mut components = Vec::new();
        let mut root = Some(start);
        while let Some(id) = root {
            let component = search
                .run_from(id)
                .map(|id| self.matrix.name(id))
                .collect();
            components.push(component);
            root = search.next_unvisited();
        }
        Ok(components)
    }
}

impl Graph for UndirectedMatrixGraph {
    type Weight = ();

    fn num_vertices(&self) -> usize {
        self.matrix.len()
    }

    fn num_edges(&self) -> usize {
        self.matrix.count() / 2
    }

    fn vertices(&self) -> Vec<&str> {
        self.matrix.names()
    }

    /// Each edge once, as `(later vertex, earlier vertex)`.
    fn edges(&self) -> Vec<Edge> {
        self.matrix
            .ids()
            .flat_map(move |u| {
                self.matrix
                    .row(u)
                    .take_while(move |v| *v < u)
                    .map(move |v| Edge::new(self.matrix.name(u), self.matrix.name(v), ()))
            })
            .collect()
    }

    fn contains_vertex(&self, name: &str) -> bool {
        self.matrix.index_of(name).is_some()
    }

    fn insert_vertex(&mut self, name: &str) -> Result<()> {
        let id = self.matrix.insert_vertex(name)?;
        tracing::debug!(vertex = name, ?id, "inserted vertex");
        Ok(())
    }

    fn remove_vertex(&mut self, name: &str) -> Result<()> {
        let id = self.matrix.remove_vertex(name)?;
        tracing::debug!(vertex = name, ?id, "removed vertex");
        Ok(())
    }

    fn insert_edge(&mut self, start: &str, end: &str, _: ()) -> Result<()> {
        let (u, v) = self.matrix.require_pair(start, end)?;
        if u == v {
            return Err(GraphError::SelfLoop(start.to_string()));
        }
        if self.matrix.contains(u, v) {
            return Err(GraphError::duplicate_edge(start, end));
        }
        self.matrix.set(u, v, true);
        self.matrix.set(v, u, true);
        tracing::debug!(start, end, "inserted edge");
        Ok(())
    }

    fn remove_edge(&mut self, start: &str, end: &str) -> Result<()> {
        let (u, v) = self.matrix.require_pair(start, end)?;
        if !self.matrix.contains(u, v) {
            return Err(GraphError::edge_not_found(start, end));
        }
        self.matrix.set(u, v, false);
        self.matrix.set(v, u, false);
        tracing::debug!(start, end, "removed edge");
        Ok(())
    }

    fn is_adjacent(&self, start: &str, end: &str) -> Result<bool> {
        let (u, v) = self.matrix.require_pair(start, end)?;
        Ok(self.matrix.contains(u, v))
    }
}

impl DirectedGraph for UndirectedMatrixGraph {
    type Node = VertexId;

    fn num_nodes(&self) -> usize {
        self.matrix.len()
    }
}

impl Successors for UndirectedMatrixGraph {
    fn successors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> {
        self.matrix.row(node)
    }
}

impl std::fmt::Display for UndirectedMatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.matrix, f)
    }
}
