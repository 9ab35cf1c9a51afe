use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treedist::{Batch, QueryEngine};

/// Weighted path distances on a static tree, read as a batch of operations.
#[derive(Parser, Debug)]
#[command(name = "treedist")]
struct Cli {
    /// Batch file; standard input when absent or `-`.
    input: Option<PathBuf>,

    /// Print the order sequence and the Euler tour to stderr before running.
    #[arg(long)]
    dump_tour: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = read_input(cli.input.as_ref())?;
    let batch = Batch::parse(&input).context("failed to parse batch")?;
    let mut engine = QueryEngine::new(&batch.tree).context("failed to build tree")?;

    if cli.dump_tour {
        eprintln!("Order:\n{:?}", engine.tour().order());
        eprintln!("\nEuler tour:\n{:?}", engine.tour().tour());
    }

    let answers = batch
        .run_on(&mut engine)
        .context("failed to run operations")?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for answer in answers {
        writeln!(out, "{}", answer)?;
    }
    out.flush()?;

    Ok(())
}
