use anyhow::{Context, Result};
use clap::Parser;
use logtint::cli::Cli;
use logtint::highlight::HighlightPipeline;
use logtint::process::{ChildProcess, StreamKind};
use logtint::stream::LineStream;
use std::io::{self, Write};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout stays a pure highlighted stream.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let pipeline = HighlightPipeline::with_sql(cli.sql);

    let exit_code = if cli.command.is_empty() {
        run_stdin(&pipeline)?
    } else {
        run_command(&pipeline, &cli)?
    };

    std::process::exit(exit_code);
}

fn run_stdin(pipeline: &HighlightPipeline) -> Result<i32> {
    let stdin = io::stdin();
    let mut stream = LineStream::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while let Some(line) = stream.next_line().context("failed to read from stdin")? {
        writeln!(out, "{}", pipeline.highlight_line(&line))?;
    }
    Ok(0)
}

fn run_command(pipeline: &HighlightPipeline, cli: &Cli) -> Result<i32> {
    let command = &cli.command[0];
    let args = &cli.command[1..];
    debug!("spawning {} with {} argument(s)", command, args.len());

    let child = ChildProcess::spawn(command, args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    while let Some(line) = child.next_line() {
        match line.stream {
            StreamKind::Stdout => writeln!(out, "{}", pipeline.highlight_line(&line.content))?,
            StreamKind::Stderr => {
                if !cli.quiet {
                    eprintln!("{}", pipeline.highlight_line(&line.content));
                }
            }
        }
    }

    let status = child.wait()?;
    Ok(status.code().unwrap_or(-1))
}
