use thiserror::Error;

/// Which argument of an operation named the vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
    Vertex,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start vertex"),
            Endpoint::End => write!(f, "end vertex"),
            Endpoint::Vertex => write!(f, "vertex"),
        }
    }
}

/// A rejected graph operation. The graph is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex `{0}` is already present in the graph")]
    DuplicateVertex(String),
    #[error("edge from `{start}` to `{end}` is already present in the graph")]
    DuplicateEdge { start: String, end: String },
    #[error("{endpoint} `{name}` is not present in the graph")]
    UnknownVertex { name: String, endpoint: Endpoint },
    #[error("`{0}` cannot be connected to itself")]
    SelfLoop(String),
    #[error("edge from `{start}` to `{end}` is not present in the graph")]
    EdgeNotFound { start: String, end: String },
}

impl GraphError {
    pub(crate) fn unknown(name: &str, endpoint: Endpoint) -> Self {
        GraphError::UnknownVertex {
            name: name.to_string(),
            endpoint,
        }
    }

    pub(crate) fn duplicate_edge(start: &str, end: &str) -> Self {
        GraphError::DuplicateEdge {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub(crate) fn edge_not_found(start: &str, end: &str) -> Self {
        GraphError::EdgeNotFound {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_endpoint() {
        let err = GraphError::unknown("AA", Endpoint::Start);
        assert_eq!(err.to_string(), "start vertex `AA` is not present in the graph");
        let err = GraphError::unknown("BB", Endpoint::Vertex);
        assert_eq!(err.to_string(), "vertex `BB` is not present in the graph");
    }
}
