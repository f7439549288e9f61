use std::io::Cursor;

use driver::{
    config::Config,
    session::{AnyGraph, Session},
    IntoArgs,
};

fn run_demo(config: &str, script: &str) -> String {
    let args = Config::from_toml(config)
        .unwrap_or_else(|e| panic!("{e}"))
        .into_args();
    let graph = AnyGraph::seeded(args.kind, args.seed.as_ref().unwrap()).unwrap();
    let output = driver::run_lines(Cursor::new(script), Session::new(graph, Vec::new())).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_weighted_list_demo() {
    let output = run_demo(
        include_str!("../../demos/weighted_list.toml"),
        r#"
display
degree CC
adjacent DD AA
adjacent AA DD
adjacent AA ZZ
insert-edge AA BB 10
remove-vertex AA
display
"#,
    );
    assert_eq!(
        output,
        r#"AA -> {BB: 3, CC: 5}
BB -> {EE: 9}
CC -> {DD: 4, AA: 7}
DD -> {AA: 2}
EE -> {}
vertices (5): AA BB CC DD EE
edges (6): (AA, BB, 3) (AA, CC, 5) (BB, EE, 9) (CC, DD, 4) (CC, AA, 7) (DD, AA, 2)
indegree of CC is 1
outdegree of CC is 2
true
false
error: end vertex `ZZ` is not present in the graph
error: edge from `AA` to `BB` is already present in the graph
BB -> {EE: 9}
CC -> {DD: 4}
DD -> {}
EE -> {}
vertices (4): BB CC DD EE
edges (2): (BB, EE, 9) (CC, DD, 4)
"#
    );
}

#[test]
fn test_bfs_demo() {
    let output = run_demo(
        include_str!("../../demos/bfs_undirected.toml"),
        r#"
bfs Zero
degree Five
remove-edge Zero One
remove-edge Seven Zero
bfs Zero
bfs-all Zero
components Zero
bfs Ten
"#,
    );
    assert_eq!(
        output,
        r#"Zero One Seven Two Four Five Eight Three Six Nine
degree of Five is 5
Zero
Zero One Two Four Five Three Seven Six Eight Nine
Zero
One Two Four Five Three Seven Six Eight Nine
error: vertex `Ten` is not present in the graph
"#
    );
}

#[test]
fn test_path_matrix_demo() {
    let output = run_demo(
        include_str!("../../demos/path_matrix.toml"),
        "display\npath-matrix\n",
    );
    assert_eq!(
        output,
        r#"0 1 0 1
0 0 1 1
0 0 0 0
0 0 1 0
vertices (4): Zero One Two Three
edges (5): (Zero, One) (Zero, Three) (One, Two) (One, Three) (Three, Two)
0 1 3 2
0 0 2 1
0 0 0 0
0 0 1 0

0 1 1 1
0 0 1 1
0 0 0 0
0 0 1 0
"#
    );
}

#[test]
fn test_cycle_makes_every_vertex_reachable() {
    let output = run_demo(
        include_str!("../../demos/path_matrix.toml"),
        "insert-edge Two Zero\npath-matrix\nquit\npath-matrix\n",
    );
    assert!(output.ends_with("\n\n1 1 1 1\n1 1 1 1\n1 1 1 1\n1 1 1 1\n"));
    // nothing runs after `quit`
    assert_eq!(output.matches("1 1 1 1").count(), 4);
}

#[test]
fn test_session_script_demo() {
    let output = run_demo(
        include_str!("../../demos/path_matrix.toml"),
        include_str!("../../demos/session.txt"),
    );
    assert!(output.contains("indegree of Two is 2\noutdegree of Two is 0\n"));
    assert!(!output.contains("error"));
}
