use std::path::PathBuf;

use serde::Deserialize;

/// Storage strategy of the graph a session works on.
#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Directed, weighted adjacency lists
    #[default]
    List,
    /// Undirected adjacency matrix with breadth-first search
    Undirected,
    /// Directed adjacency matrix with path matrix
    Directed,
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphKind::List => write!(f, "list"),
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Directed => write!(f, "directed"),
        }
    }
}

#[derive(clap::Args, Deserialize, Debug, Default)]
pub struct Config {
    #[clap(short, long, value_enum)]
    /// Kind of graph to build
    pub kind: Option<GraphKind>,
    #[clap(short, long, value_name = "FILE")]
    /// Path to a command file, read from stdin when absent
    pub script: Option<PathBuf>,
    #[clap(long, value_name = "LEVEL")]
    /// Log filter used when RUST_LOG is not set
    pub log_level: Option<String>,
    #[clap(skip)]
    /// Vertices and edges inserted before any command runs
    pub graph: Option<GraphSeed>,
}

impl Config {
    pub fn merge(self, other: Self) -> Self {
        Self {
            kind: self.kind.or(other.kind),
            script: self.script.or(other.script),
            log_level: self.log_level.or(other.log_level),
            graph: self.graph.or(other.graph),
        }
    }

    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

impl crate::IntoArgs for Config {
    fn into_args(self) -> crate::SessionArgs {
        crate::SessionArgs {
            kind: self.kind.unwrap_or_default(),
            script: self.script,
            seed: self.graph,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct GraphSeed {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSeed>,
}

/// `[start, end]` for unweighted graphs, `[start, end, weight]` otherwise.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum EdgeSeed {
    Weighted(String, String, i64),
    Unweighted(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        let config = Config::from_toml(
            r#"
kind = "list"

[graph]
vertices = ["AA", "BB"]
edges = [["AA", "BB", 3]]
"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.kind, Some(GraphKind::List));
        let seed = config.graph.unwrap();
        assert_eq!(seed.vertices, vec!["AA", "BB"]);
        assert_eq!(
            seed.edges,
            vec![EdgeSeed::Weighted("AA".into(), "BB".into(), 3)]
        );
    }

    #[test]
    fn test_command_line_wins() {
        let file = Config {
            kind: Some(GraphKind::Directed),
            log_level: Some("debug".into()),
            ..Default::default()
        };
        let command_line = Config {
            kind: Some(GraphKind::Undirected),
            ..Default::default()
        };
        let merged = command_line.merge(file);
        assert_eq!(merged.kind, Some(GraphKind::Undirected));
        assert_eq!(merged.log_level.as_deref(), Some("debug"));
    }
}
