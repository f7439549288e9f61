use data_structure::graph::{DirectedGraph, Predecessors, Successors};

use crate::{
    error::{Endpoint, GraphError, Result},
    matrix::AdjacencyMatrix,
    DirectedDegree, Edge, Graph, PathMatrix, VertexId,
};

/// A directed, unweighted graph over an adjacency matrix.
#[derive(Debug, Clone, Default)]
pub struct DirectedMatrixGraph {
    matrix: AdjacencyMatrix,
}

impl DirectedMatrixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::with_capacity(capacity),
        }
    }

    /// Reachability over paths of length 1 to n.
    ///
    /// O(n^4): n - 1 dense matrix multiplications. Only meant for small graphs.
    pub fn find_path_matrix(&self) -> PathMatrix {
        let names = self.matrix.names().into_iter().map(String::from).collect();
        PathMatrix::compute(names, self.matrix.rows())
    }
}

impl Graph for DirectedMatrixGraph {
    type Weight = ();

    fn num_vertices(&self) -> usize {
        self.matrix.len()
    }

    fn num_edges(&self) -> usize {
        self.matrix.count()
    }

    fn vertices(&self) -> Vec<&str> {
        self.matrix.names()
    }

    fn edges(&self) -> Vec<Edge> {
        self.matrix
            .ids()
            .flat_map(move |u| {
                self.matrix
                    .row(u)
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
        tracing::debug!(start, end, "inserted edge");
        Ok(())
    }

    fn remove_edge(&mut self, start: &str, end: &str) -> Result<()> {
        let (u, v) = self.matrix.require_pair(start, end)?;
        if !self.matrix.contains(u, v) {
            return Err(GraphError::edge_not_found(start, end));
        }
        self.matrix.set(u, v, false);
        tracing::debug!(start, end, "removed edge");
        Ok(())
    }

    fn is_adjacent(&self, start: &str, end: &str) -> Result<bool> {
        let (u, v) = self.matrix.require_pair(start, end)?;
        Ok(self.matrix.contains(u, v))
    }
}

impl DirectedDegree for DirectedMatrixGraph {
    fn outdegree(&self, name: &str) -> Result<usize> {
        let id = self.matrix.require(name, Endpoint::Vertex)?;
        Ok(self.successors(id).count())
    }

    fn indegree(&self, name: &str) -> Result<usize> {
        let id = self.matrix.require(name, Endpoint::Vertex)?;
        Ok(self.predecessors(id).count())
    }
}

impl DirectedGraph for DirectedMatrixGraph {
    type Node = VertexId;

    fn num_nodes(&self) -> usize {
        self.matrix.len()
    }
}

impl Successors for DirectedMatrixGraph {
    fn successors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> {
        self.matrix.row(node)
    }
}

impl Predecessors for DirectedMatrixGraph {
    fn predecessors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> {
        self.matrix.column(node)
    }
}

impl std::fmt::Display for DirectedMatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.matrix, f)
    }
}
