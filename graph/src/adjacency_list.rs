use data_structure::FxIndexMap;

use crate::{
    error::{Endpoint, GraphError, Result},
    DirectedDegree, Edge, Graph,
};

/// A directed, weighted graph stored as adjacency lists.
///
/// Vertices and each vertex's outgoing edges keep their insertion order,
/// which is also the order of `vertices()` and `edges()`.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<W = i64> {
    adjacency: FxIndexMap<String, FxIndexMap<String, W>>,
}

impl<W> AdjacencyListGraph<W> {
    pub fn new() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
        }
    }

    /// The weight of the edge from `start` to `end`, if there is one.
    pub fn weight(&self, start: &str, end: &str) -> Option<&W> {
        self.adjacency.get(start)?.get(end)
    }

    fn neighbors(&self, name: &str, endpoint: Endpoint) -> Result<&FxIndexMap<String, W>> {
        self.adjacency
            .get(name)
            .ok_or_else(|| GraphError::unknown(name, endpoint))
    }
}

impl<W> Default for AdjacencyListGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Clone> Graph for AdjacencyListGraph<W> {
    type Weight = W;

    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    fn vertices(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    fn edges(&self) -> Vec<Edge<W>> {
        self.adjacency
            .iter()
            .flat_map(|(start, neighbors)| {
                neighbors
                    .iter()
                    .map(move |(end, weight)| Edge::new(start, end, weight.clone()))
            })
            .collect()
    }

    fn contains_vertex(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    fn insert_vertex(&mut self, name: &str) -> Result<()> {
        if self.adjacency.contains_key(name) {
            return Err(GraphError::DuplicateVertex(name.to_string()));
        }
        self.adjacency.insert(name.to_string(), FxIndexMap::default());
        tracing::debug!(vertex = name, "inserted vertex");
        Ok(())
    }

    fn remove_vertex(&mut self, name: &str) -> Result<()> {
        if self.adjacency.shift_remove(name).is_none() {
            return Err(GraphError::unknown(name, Endpoint::Vertex));
        }
        // Full scan over every remaining adjacency list.
        let mut purged = 0;
        for neighbors in self.adjacency.values_mut() {
            if neighbors.shift_remove(name).is_some() {
                purged += 1;
            }
        }
        tracing::debug!(vertex = name, purged, "removed vertex");
        Ok(())
    }

    fn insert_edge(&mut self, start: &str, end: &str, weight: W) -> Result<()> {
        self.neighbors(start, Endpoint::Start)?;
        self.neighbors(end, Endpoint::End)?;
        if start == end {
            return Err(GraphError::SelfLoop(start.to_string()));
        }
        let neighbors = self
            .adjacency
            .get_mut(start)
            .ok_or_else(|| GraphError::unknown(start, Endpoint::Start))?;
        if neighbors.contains_key(end) {
            return Err(GraphError::duplicate_edge(start, end));
        }
        neighbors.insert(end.to_string(), weight);
        tracing::debug!(start, end, "inserted edge");
        Ok(())
    }

    fn remove_edge(&mut self, start: &str, end: &str) -> Result<()> {
        let removed = self
            .adjacency
            .get_mut(start)
            .and_then(|neighbors| neighbors.shift_remove(end));
        match removed {
            Some(_) => {
                tracing::debug!(start, end, "removed edge");
                Ok(())
            }
            None => Err(GraphError::edge_not_found(start, end)),
        }
    }

    fn is_adjacent(&self, start: &str, end: &str) -> Result<bool> {
        let neighbors = self.neighbors(start, Endpoint::Start)?;
        self.neighbors(end, Endpoint::End)?;
        Ok(neighbors.contains_key(end))
    }
}

impl<W> DirectedDegree for AdjacencyListGraph<W> {
    fn outdegree(&self, name: &str) -> Result<usize> {
        Ok(self.neighbors(name, Endpoint::Vertex)?.len())
    }

    fn indegree(&self, name: &str) -> Result<usize> {
        self.neighbors(name, Endpoint::Vertex)?;
        Ok(self
            .adjacency
            .values()
            .filter(|neighbors| neighbors.contains_key(name))
            .count())
    }
}

impl<W: std::fmt::Display> std::fmt::Display for AdjacencyListGraph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex} -> {{")?;
            for (i, (end, weight)) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{end}: {weight}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
