use std::io::Write;

use anyhow::{anyhow, bail};
use graph::{
    AdjacencyListGraph, DirectedDegree, DirectedMatrixGraph, Edge, Graph, UndirectedMatrixGraph,
};

use crate::{
    command::Command,
    config::{EdgeSeed, GraphKind, GraphSeed},
};

/// The graph a session works on.
#[derive(Debug, Clone)]
pub enum AnyGraph {
    List(AdjacencyListGraph<i64>),
    Undirected(UndirectedMatrixGraph),
    Directed(DirectedMatrixGraph),
}

/// Runs `$body` with `$g` bound to whichever graph is inside `$graph`.
macro_rules! with_graph {
    ($graph:expr, $g:ident => $body:expr) => {
        match $graph {
            AnyGraph::List($g) => $body,
            AnyGraph::Undirected($g) => $body,
            AnyGraph::Directed($g) => $body,
        }
    };
}

impl AnyGraph {
    pub fn new(kind: GraphKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Reserves room for `capacity` vertices in the matrix-backed kinds.
    pub fn with_capacity(kind: GraphKind, capacity: usize) -> Self {
        match kind {
            GraphKind::List => AnyGraph::List(AdjacencyListGraph::new()),
            GraphKind::Undirected => {
                AnyGraph::Undirected(UndirectedMatrixGraph::with_capacity(capacity))
            }
            GraphKind::Directed => AnyGraph::Directed(DirectedMatrixGraph::with_capacity(capacity)),
        }
    }

    pub fn kind(&self) -> GraphKind {
        match self {
            AnyGraph::List(_) => GraphKind::List,
            AnyGraph::Undirected(_) => GraphKind::Undirected,
            AnyGraph::Directed(_) => GraphKind::Directed,
        }
    }

    pub fn seeded(kind: GraphKind, seed: &GraphSeed) -> anyhow::Result<Self> {
        let mut graph = Self::with_capacity(kind, seed.vertices.len());
        for vertex in &seed.vertices {
            with_graph!(&mut graph, g => g.insert_vertex(vertex))?;
        }
        for edge in &seed.edges {
            let (start, end, weight) = match edge {
                EdgeSeed::Weighted(start, end, weight) => (start, end, Some(*weight)),
                EdgeSeed::Unweighted(start, end) => (start, end, None),
            };
            graph.insert_edge(start, end, weight)?;
        }
        Ok(graph)
    }

    pub fn insert_edge(&mut self, start: &str, end: &str, weight: Option<i64>) -> anyhow::Result<()> {
        match (self, weight) {
            (AnyGraph::List(g), Some(weight)) => g.insert_edge(start, end, weight)?,
            (AnyGraph::List(_), None) => {
                bail!("edge from `{start}` to `{end}` needs a weight in a list graph")
            }
            (AnyGraph::Undirected(g), None) => g.insert_edge(start, end, ())?,
            (AnyGraph::Directed(g), None) => g.insert_edge(start, end, ())?,
            (graph, Some(_)) => bail!("{} graphs are unweighted", graph.kind()),
        }
        Ok(())
    }

    fn undirected(&self, command: &str) -> anyhow::Result<&UndirectedMatrixGraph> {
        match self {
            AnyGraph::Undirected(g) => Ok(g),
            graph => Err(anyhow!("`{command}` is not supported by {} graphs", graph.kind())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Executes commands against one graph and writes their results.
///
/// Rejected commands are reported on the output as `error: ...` and leave
/// the session running.
pub struct Session<W> {
    graph: AnyGraph,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(graph: AnyGraph, out: W) -> Self {
        Self { graph, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn execute_line(&mut self, line: &str) -> std::io::Result<Flow> {
        match Command::parse_line(line) {
            None => Ok(Flow::Continue),
            Some(Ok(command)) => self.execute(&command),
            Some(Err(err)) if err.use_stderr() => {
                // the message up to the usage section, folded onto one line
                let rendered = err.to_string();
                let message: Vec<&str> = rendered
                    .lines()
                    .take_while(|line| !line.trim().is_empty())
                    .map(str::trim)
                    .collect();
                writeln!(self.out, "{}", message.join(" "))?;
                Ok(Flow::Continue)
            }
            // help output
            Some(Err(err)) => {
                write!(self.out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Reports an input line that could not be read as a command.
    pub fn reject_line(&mut self, reason: &str) -> std::io::Result<Flow> {
        tracing::info!("rejected line: {reason}");
        writeln!(self.out, "error: {reason}")?;
        Ok(Flow::Continue)
    }

    pub fn execute(&mut self, command: &Command) -> std::io::Result<Flow> {
        tracing::debug!(?command, "executing");
        match self.run(command) {
            Ok(flow) => Ok(flow),
            Err(err) => match err.downcast::<std::io::Error>() {
                Ok(io) => Err(io),
                Err(err) => {
                    tracing::info!("rejected: {err}");
                    writeln!(self.out, "error: {err}")?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    fn run(&mut self, command: &Command) -> anyhow::Result<Flow> {
        let out = &mut self.out;
        match command {
            Command::Display => display(&self.graph, out)?,
            Command::InsertVertex { name } => {
                with_graph!(&mut self.graph, g => g.insert_vertex(name))?
            }
            Command::RemoveVertex { name } => {
                with_graph!(&mut self.graph, g => g.remove_vertex(name))?
            }
            Command::InsertEdge { start, end, weight } => {
                self.graph.insert_edge(start, end, *weight)?
            }
            Command::RemoveEdge { start, end } => {
                with_graph!(&mut self.graph, g => g.remove_edge(start, end))?
            }
            Command::Degree { name } => match &self.graph {
                AnyGraph::Undirected(g) => writeln!(out, "degree of {name} is {}", g.degree(name)?)?,
                AnyGraph::List(g) => directed_degree(g, name, out)?,
                AnyGraph::Directed(g) => directed_degree(g, name, out)?,
            },
            Command::Adjacent { start, end } => {
                let adjacent = with_graph!(&self.graph, g => g.is_adjacent(start, end))?;
                writeln!(out, "{adjacent}")?
            }
            Command::Bfs { start } => {
                let order: Vec<_> = self.graph.undirected("bfs")?.bfs_traversal(start)?.collect();
                writeln!(out, "{}", order.join(" "))?
            }
            Command::BfsAll { start } => {
                let order: Vec<_> = self
                    .graph
                    .undirected("bfs-all")?
                    .bfs_traversal_all(start)?
                    .collect();
                writeln!(out, "{}", order.join(" "))?
            }
            Command::Components { start } => {
                for component in self.graph.undirected("components")?.connected_components(start)? {
                    writeln!(out, "{}", component.join(" "))?;
                }
            }
            Command::PathMatrix => {
                let AnyGraph::Directed(g) = &self.graph else {
                    bail!(
                        "`path-matrix` is not supported by {} graphs",
                        self.graph.kind()
                    );
                };
                let paths = g.find_path_matrix();
                for row in paths.walk_counts() {
                    let cells: Vec<_> = row.iter().map(u64::to_string).collect();
                    writeln!(out, "{}", cells.join(" "))?;
                }
                writeln!(out)?;
                write!(out, "{paths}")?
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn directed_degree(g: &impl DirectedDegree, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "indegree of {name} is {}", g.indegree(name)?)?;
    writeln!(out, "outdegree of {name} is {}", g.outdegree(name)?)?;
    Ok(())
}

fn display(graph: &AnyGraph, out: &mut impl Write) -> anyhow::Result<()> {
    let edges: Vec<String> = match graph {
        AnyGraph::List(g) => {
            write!(out, "{g}")?;
            g.edges().iter().map(format_weighted).collect()
        }
        AnyGraph::Undirected(g) => {
            write!(out, "{g}")?;
            g.edges().iter().map(format_unweighted).collect()
        }
        AnyGraph::Directed(g) => {
            write!(out, "{g}")?;
            g.edges().iter().map(format_unweighted).collect()
        }
    };
    let vertices = with_graph!(graph, g => g.vertices().join(" "));
    writeln!(out, "vertices ({}): {vertices}", with_graph!(graph, g => g.num_vertices()))?;
    writeln!(out, "edges ({}): {}", edges.len(), edges.join(" "))?;
    Ok(())
}

fn format_weighted(edge: &Edge<i64>) -> String {
    format!("({}, {}, {})", edge.start, edge.end, edge.weight)
}

fn format_unweighted(edge: &Edge) -> String {
    format!("({}, {})", edge.start, edge.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: GraphKind, lines: &[&str]) -> String {
        let mut session = Session::new(AnyGraph::new(kind), Vec::new());
        for line in lines {
            session.execute_line(line).unwrap();
        }
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_rejections_are_reported() {
        let output = run(
            GraphKind::List,
            &["insert-vertex a", "insert-vertex a", "insert-edge a b 1", "insert-edge a a"],
        );
        assert_eq!(
            output,
            "error: vertex `a` is already present in the graph\n\
             error: end vertex `b` is not present in the graph\n\
             error: edge from `a` to `a` needs a weight in a list graph\n"
        );
    }

    #[test]
    fn test_unsupported_commands() {
        let output = run(GraphKind::Directed, &["insert-vertex a", "bfs a", "insert-edge a a 2"]);
        assert_eq!(
            output,
            "error: `bfs` is not supported by directed graphs\n\
             error: directed graphs are unweighted\n"
        );
        let output = run(GraphKind::Undirected, &["path-matrix"]);
        assert_eq!(
            output,
            "error: `path-matrix` is not supported by undirected graphs\n"
        );
    }

    #[test]
    fn test_quit_and_comments() {
        let mut session = Session::new(AnyGraph::new(GraphKind::Undirected), Vec::new());
        assert_eq!(session.execute_line("# nothing").unwrap(), Flow::Continue);
        assert_eq!(session.execute_line("quit").unwrap(), Flow::Quit);
        assert!(session.into_output().is_empty());
    }

    #[test]
    fn test_parse_error_is_one_line() {
        let output = run(GraphKind::List, &["frobnicate"]);
        assert!(output.starts_with("error: "));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_missing_argument_is_named() {
        let output = run(GraphKind::List, &["insert-vertex", "display"]);
        assert_eq!(
            output,
            "error: the following required arguments were not provided: <NAME>\n\
             vertices (0): \n\
             edges (0): \n"
        );
    }

    #[test]
    fn test_hyphenated_vertex_names() {
        let output = run(
            GraphKind::Directed,
            &["insert-vertex -a", "insert-vertex b", "insert-edge -a b", "adjacent -a b"],
        );
        assert_eq!(output, "true\n");
    }

    #[test]
    fn test_seed_rejects_weight_mismatch() {
        let seed = GraphSeed {
            vertices: vec!["a".into(), "b".into()],
            edges: vec![EdgeSeed::Unweighted("a".into(), "b".into())],
        };
        let graph = AnyGraph::seeded(GraphKind::Undirected, &seed).unwrap();
        assert_eq!(graph.kind(), GraphKind::Undirected);
        assert!(AnyGraph::seeded(GraphKind::List, &seed).is_err());
    }
}
