//! plainsql CLI
//!
//! Parses queries given on the command line or read from a file and prints
//! the resulting AST.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use plainsql_core::{parse_many, BatchError, Query};

/// Parse queries of a small SQL dialect into an AST.
#[derive(Parser)]
#[command(name = "plainsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Queries to parse.
    queries: Vec<String>,

    /// Read queries from a file, one per line (`-` reads stdin).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, env = "PLAINSQL_FORMAT", default_value_t = Format::Debug)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Rust debug representation.
    Debug,
    /// Pretty-printed JSON.
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let Cli {
        mut queries,
        file,
        format,
        verbose,
    } = Cli::parse();

    // Setup logging
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(path) = &file {
        queries.extend(read_queries(path)?);
    }
    if queries.is_empty() {
        anyhow::bail!("no queries given; pass them as arguments or with --file");
    }
    debug!(count = queries.len(), "parsing queries");

    match parse_many(&queries) {
        Ok(parsed) => {
            for query in &parsed {
                print_query(query, format)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(BatchError { index, source }) => {
            eprintln!("error: {source}");
            source.render(&queries[index], &mut io::stderr().lock())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// One query per non-empty line; lines starting with `--` are comments.
fn read_queries(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read queries from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read queries from {}", path.display()))?
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("--"))
        .map(String::from)
        .collect())
}

fn print_query(query: &Query, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Debug => println!("{query:#?}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(query)?),
    }
    Ok(())
}
