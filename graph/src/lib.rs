//! Graph abstract data types over two storage strategies.
//!
//! [`AdjacencyListGraph`] keeps a directed, weighted graph as an
//! insertion-ordered map of neighbor maps. [`UndirectedMatrixGraph`] and
//! [`DirectedMatrixGraph`] keep a dense boolean matrix next to a list of
//! vertices and add breadth-first traversal and reachability respectively.
mod adjacency_list;
mod directed;
pub mod error;
mod matrix;
mod path_matrix;
mod undirected;
mod vertex;

pub use adjacency_list::AdjacencyListGraph;
pub use directed::DirectedMatrixGraph;
pub use error::{Endpoint, GraphError};
pub use path_matrix::PathMatrix;
pub use undirected::UndirectedMatrixGraph;
pub use vertex::{Edge, Vertex, VertexId};

/// Operations shared by every graph representation.
///
/// Vertices are identified by name. Every operation that rejects its input
/// leaves the graph unchanged.
pub trait Graph {
    type Weight;

    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn vertices(&self) -> Vec<&str>;

    fn edges(&self) -> Vec<Edge<Self::Weight>>;

    fn contains_vertex(&self, name: &str) -> bool;

    fn insert_vertex(&mut self, name: &str) -> error::Result<()>;

    /// Removes the vertex together with every edge incident to it.
    fn remove_vertex(&mut self, name: &str) -> error::Result<()>;

    /// Rejects self-loops and a second edge between the same ordered pair.
    fn insert_edge(&mut self, start: &str, end: &str, weight: Self::Weight) -> error::Result<()>;

    fn remove_edge(&mut self, start: &str, end: &str) -> error::Result<()>;

    /// Whether an edge leads from `start` to `end`.
    ///
    /// Unknown vertices are an error, never `Ok(false)`.
    fn is_adjacent(&self, start: &str, end: &str) -> error::Result<bool>;
}

/// Separate in- and out-degree for directed representations.
pub trait DirectedDegree {
    fn outdegree(&self, name: &str) -> error::Result<usize>;

    fn indegree(&self, name: &str) -> error::Result<usize>;
}
