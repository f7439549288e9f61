use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use driver::{config::Config, IntoArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
/// Build a graph and run graph commands against it, one per line
struct CommandLine {
    #[clap(flatten)]
    command_line: Config,
    #[clap(long, value_name = "FILE")]
    /// Path to the config file
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let command_line = CommandLine::parse();

    let config = if let Some(path) = &command_line.config {
        let source = fs::read_to_string(path)
            .unwrap_or_else(|err| exit_with(format!("cannot read `{}`: {err}", path.display())));
        Config::from_toml(&source)
            .unwrap_or_else(|err| exit_with(format!("invalid config `{}`: {err}", path.display())))
    } else {
        Config::default()
    };
    let config = command_line.command_line.merge(config);

    let level = config.log_level.as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    driver::run_session(config.into_args())
}

fn exit_with(message: String) -> ! {
    <CommandLine as clap::CommandFactory>::command()
        .error(clap::error::ErrorKind::Io, message)
        .exit();
}
