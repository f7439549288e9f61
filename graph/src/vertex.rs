use data_structure::index::{vec::Idx, Indexable};

/// Position of a vertex in a matrix-backed graph.
///
/// Positions are dense and shift down when an earlier vertex is removed,
/// so an id is only meaningful until the next removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl Idx for VertexId {
    fn new(idx: usize) -> Self {
        VertexId(idx)
    }

    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    name: String,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Indexable<VertexId> for Vertex {}

/// An edge as reported by `Graph::edges`. Unweighted graphs use `W = ()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<W = ()> {
    pub start: String,
    pub end: String,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(start: impl Into<String>, end: impl Into<String>, weight: W) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
        }
    }
}
