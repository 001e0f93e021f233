use std::{fs, io, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use flo::run_script_to;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// flo runs line-oriented scripts made of `let`, `print` and `if`/`else`
/// statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to run.
    script: PathBuf,
}

/// Installs a stderr logger when `RUST_LOG` is set, e.g. `RUST_LOG=flo=debug`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.script).with_context(|| {
                     format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                             args.script.display())
                 })?;

    run_script_to(&source, io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
