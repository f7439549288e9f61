use data_structure::{
    index::vec::{Idx, IndexVec},
    BitVec,
};

use crate::{
    error::{Endpoint, GraphError, Result},
    Vertex, VertexId,
};

/// Dense square adjacency storage shared by the matrix-backed graphs.
///
/// `rows[u][v]` is set when an edge leads from `u` to `v`. The matrix
/// dimension always equals the number of vertices.
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyMatrix {
    vertices: IndexVec<VertexId, Vertex>,
    rows: Vec<BitVec>,
}

impl AdjacencyMatrix {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexVec::with_capacity(capacity),
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.vertices.position(|vertex| vertex.name() == name)
    }

    pub fn require(&self, name: &str, endpoint: Endpoint) -> Result<VertexId> {
        self.index_of(name)
            .ok_or_else(|| GraphError::unknown(name, endpoint))
    }

    /// Looks up both ends of an edge, reporting the start vertex first.
    pub fn require_pair(&self, start: &str, end: &str) -> Result<(VertexId, VertexId)> {
        Ok((
            self.require(start, Endpoint::Start)?,
            self.require(end, Endpoint::End)?,
        ))
    }

    pub fn name(&self, id: VertexId) -> &str {
        self.vertices[id].name()
    }

    pub fn names(&self) -> Vec<&str> {
        self.vertices.iter().map(Vertex::name).collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        self.vertices.indices()
    }

    pub fn insert_vertex(&mut self, name: &str) -> Result<VertexId> {
        if self.index_of(name).is_some() {
            return Err(GraphError::DuplicateVertex(name.to_string()));
        }
        let id = self.vertices.push(Vertex::new(name));
        for row in &mut self.rows {
            row.push(false);
        }
        self.rows.push(BitVec::repeat(false, self.vertices.len()));
        Ok(id)
    }

    /// Drops the vertex's row and column. Every later vertex moves down by
    /// one position and keeps its edges under the new position.
    pub fn remove_vertex(&mut self, name: &str) -> Result<VertexId> {
        let id = self.require(name, Endpoint::Vertex)?;
        self.vertices.remove(id);
        self.rows.remove(id.index());
        for row in &mut self.rows {
            row.remove(id.index());
        }
        Ok(id)
    }

    pub fn contains(&self, start: VertexId, end: VertexId) -> bool {
        self.rows[start.index()][end.index()]
    }

    pub fn set(&mut self, start: VertexId, end: VertexId, present: bool) {
        self.rows[start.index()].set(end.index(), present);
    }

    /// Targets of `start`'s outgoing edges, in ascending position order.
    pub fn row(&self, start: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.rows[start.index()].iter_ones().map(VertexId::new)
    }

    /// Sources of `end`'s incoming edges, in ascending position order.
    pub fn column(&self, end: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| row[end.index()])
            .map(|(start, _)| VertexId::new(start))
    }

    pub fn rows(&self) -> &[BitVec] {
        &self.rows
    }

    pub fn count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

/// Writes a 0/1 matrix, one row per line.
pub(crate) fn fmt_bit_rows(f: &mut std::fmt::Formatter<'_>, rows: &[BitVec]) -> std::fmt::Result {
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|bit| if *bit { "1" } else { "0" }).collect();
        writeln!(f, "{}", cells.join(" "))?;
    }
    Ok(())
}

impl std::fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_bit_rows(f, &self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(idx: usize) -> VertexId {
        VertexId::new(idx)
    }

    #[test]
    fn test_dimension_follows_vertex_count() {
        let mut matrix = AdjacencyMatrix::with_capacity(2);
        for name in ["a", "b", "c"] {
            matrix.insert_vertex(name).unwrap();
        }
        assert_eq!(matrix.len(), 3);
        assert!(matrix.rows().iter().all(|row| row.len() == 3));
        matrix.remove_vertex("a").unwrap();
        assert_eq!(matrix.len(), 2);
        assert!(matrix.rows().iter().all(|row| row.len() == 2));
    }

    #[test]
    fn test_remove_reindexes_later_edges() {
        let mut matrix = AdjacencyMatrix::default();
        for name in ["a", "b", "c", "d"] {
            matrix.insert_vertex(name).unwrap();
        }
        matrix.set(id(0), id(3), true);
        matrix.set(id(2), id(3), true);
        matrix.set(id(3), id(1), true);
        matrix.set(id(1), id(2), true);

        assert_eq!(matrix.remove_vertex("b"), Ok(id(1)));
        assert_eq!(matrix.names(), vec!["a", "c", "d"]);
        let (c, d) = matrix.require_pair("c", "d").unwrap();
        assert_eq!((c, d), (id(1), id(2)));
        assert!(matrix.contains(id(0), d));
        assert!(matrix.contains(c, d));
        assert_eq!(matrix.count(), 2);
        assert_eq!(matrix.column(d).collect::<Vec<_>>(), vec![id(0), c]);
    }

    #[test]
    fn test_display() {
        let mut matrix = AdjacencyMatrix::default();
        matrix.insert_vertex("a").unwrap();
        matrix.insert_vertex("b").unwrap();
        matrix.set(id(0), id(1), true);
        assert_eq!(matrix.to_string(), "0 1\n0 0\n");
    }
}
