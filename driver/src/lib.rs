use std::{
    fs,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;

pub mod command;
pub mod config;
pub mod session;

use config::{GraphKind, GraphSeed};
use session::{AnyGraph, Flow, Session};

pub struct SessionArgs {
    pub kind: GraphKind,
    pub script: Option<PathBuf>,
    pub seed: Option<GraphSeed>,
}

pub trait IntoArgs {
    fn into_args(self) -> SessionArgs;
}

/// Builds the graph and executes every command of the script, or of stdin
/// when no script is given, writing results to stdout.
pub fn run_session(args: SessionArgs) -> ExitCode {
    match try_run_session(args, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("session failed: {err:?}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_run_session<W: Write>(args: SessionArgs, out: W) -> anyhow::Result<W> {
    let graph = match &args.seed {
        Some(seed) => AnyGraph::seeded(args.kind, seed).context("cannot build the initial graph")?,
        None => AnyGraph::new(args.kind),
    };
    tracing::info!(kind = %args.kind, "session started");

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            fs::File::open(path).with_context(|| format!("cannot open `{}`", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = run_lines(input, Session::new(graph, out))?;
    out.flush()?;
    Ok(out)
}

/// Feeds `input` line by line into `session` until it ends or a `quit`.
///
/// A line that is not valid UTF-8 is reported like any other rejected
/// command; only I/O failures end the session early.
pub fn run_lines<W: Write>(mut input: impl BufRead, mut session: Session<W>) -> io::Result<W> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let flow = match std::str::from_utf8(&buf) {
            Ok(line) => session.execute_line(line)?,
            Err(_) => session.reject_line("line is not valid UTF-8")?,
        };
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(session.into_output())
}
