//! `dary-heap`: interactive console for experimenting with a d-ary max-heap

use std::io;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use rust_dary_heap::console::Console;

fn main() -> Result<()> {
    let matches = Command::new("dary-heap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive console for a d-ary max-heap")
        .arg(
            Arg::new("arity")
                .short('d')
                .long("arity")
                .takes_value(true)
                .help("Branching factor of the heap (prompted for when omitted)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .takes_value(true)
                .default_value("warn")
                .help("Log filter used when RUST_LOG is not set"),
        )
        .get_matches();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(matches.value_of("log-level").unwrap_or("warn")))
        .context("invalid --log-level filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let arity = matches
        .value_of("arity")
        .map(str::parse::<usize>)
        .transpose()
        .context("--arity must be a non-negative integer")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::start(stdin.lock(), stdout.lock(), arity)?;
    console.run()?;
    Ok(())
}
