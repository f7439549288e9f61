use clap::{Parser, Subcommand};

/// One line of session input.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the graph, its vertices and its edges
    Display,
    InsertVertex {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    RemoveVertex {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Insert an edge; the weight is required for list graphs only
    InsertEdge {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
        #[arg(allow_negative_numbers = true)]
        weight: Option<i64>,
    },
    RemoveEdge {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
    },
    /// Show the degree, or the in- and out-degree of directed graphs
    Degree {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Check for an edge from START to END
    Adjacent {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
    },
    /// Breadth-first search from START (undirected only)
    Bfs {
        #[arg(allow_hyphen_values = true)]
        start: String,
    },
    /// Breadth-first search covering every component (undirected only)
    BfsAll {
        #[arg(allow_hyphen_values = true)]
        start: String,
    },
    /// Connected components in breadth-first order (undirected only)
    Components {
        #[arg(allow_hyphen_values = true)]
        start: String,
    },
    /// Reachability between every pair of vertices (directed only)
    PathMatrix,
    Quit,
}

impl Command {
    /// Parses a line, or `None` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Option<Result<Self, clap::Error>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(CommandLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            Command::parse_line("insert-edge AA BB 3").map(Result::unwrap),
            Some(Command::InsertEdge {
                start: "AA".into(),
                end: "BB".into(),
                weight: Some(3),
            })
        );
        assert_eq!(
            Command::parse_line("  bfs-all Zero ").map(Result::unwrap),
            Some(Command::BfsAll {
                start: "Zero".into()
            })
        );
        assert!(Command::parse_line("   ").is_none());
        assert!(Command::parse_line("# comment").is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse_line("frobnicate"), Some(Err(_))));
        assert!(matches!(Command::parse_line("insert-vertex"), Some(Err(_))));
        assert!(matches!(Command::parse_line("insert-edge a b x"), Some(Err(_))));
    }

    #[test]
    fn test_names_may_start_with_hyphen() {
        assert_eq!(
            Command::parse_line("insert-vertex -b").map(Result::unwrap),
            Some(Command::InsertVertex { name: "-b".into() })
        );
        assert_eq!(
            Command::parse_line("insert-edge -a -b -3").map(Result::unwrap),
            Some(Command::InsertEdge {
                start: "-a".into(),
                end: "-b".into(),
                weight: Some(-3),
            })
        );
    }
}
